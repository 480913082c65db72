use engine::animation::{
    AnimationScheduler, AnimationSpec, Easing, IterationCount, Keyframe, Phase, PlayDirection,
    SequenceConfig, SequenceDirection, Trigger,
};
use engine::render::RenderMode;

fn fade_spec(trigger: Trigger) -> AnimationSpec {
    AnimationSpec {
        trigger,
        keyframes: vec![
            Keyframe::new(0.0).set("opacity", 0.0),
            Keyframe::new(1.0).set("opacity", 1.0),
        ],
        duration_ms: 300.0,
        delay_ms: 0.0,
        easing: Easing::Linear,
        repeat: IterationCount::Finite(1),
        direction: PlayDirection::Normal,
    }
}

fn opacity(scheduler: &AnimationScheduler, handle: engine::animation::AnimationHandle) -> f64 {
    scheduler.sample(handle).expect("sample")["opacity"]
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn test_mount_arms_then_plays_on_tick() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("title", fade_spec(Trigger::Mount));

    // Armed before any tick; the initial state is the first keyframe.
    assert_eq!(scheduler.phase(handle), Some(Phase::Armed));
    approx(opacity(&scheduler, handle), 0.0);

    scheduler.tick(1000.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Playing));

    scheduler.tick(1150.0);
    approx(opacity(&scheduler, handle), 0.5);

    scheduler.tick(1400.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Settled));
    approx(opacity(&scheduler, handle), 1.0);
}

#[test]
fn test_delay_holds_initial_state() {
    let mut scheduler = AnimationScheduler::new();
    let mut spec = fade_spec(Trigger::Mount);
    spec.delay_ms = 200.0;
    let handle = scheduler.schedule("title", spec);

    scheduler.tick(1000.0);
    scheduler.tick(1100.0);
    approx(opacity(&scheduler, handle), 0.0);

    scheduler.tick(1350.0);
    approx(opacity(&scheduler, handle), 0.5);
}

#[test]
fn test_cancel_is_idempotent() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("title", fade_spec(Trigger::Mount));

    scheduler.cancel(handle);
    assert_eq!(scheduler.sample(handle), None);
    assert_eq!(scheduler.phase(handle), None);
    assert_eq!(scheduler.active_count(), 0);

    // Second cancellation is a no-op, not a fault.
    scheduler.cancel(handle);
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn test_release_node_drops_all_handles() {
    let mut scheduler = AnimationScheduler::new();
    let a = scheduler.schedule("row-0", fade_spec(Trigger::Mount));
    let b = scheduler.schedule("row-0", fade_spec(Trigger::Hover));
    let c = scheduler.schedule("row-1", fade_spec(Trigger::Mount));

    scheduler.release_node("row-0");
    assert_eq!(scheduler.sample(a), None);
    assert_eq!(scheduler.sample(b), None);
    assert!(scheduler.phase(c).is_some());
    assert_eq!(scheduler.active_count(), 1);
}

#[test]
fn test_in_view_fires_once_and_latches() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("photo", fade_spec(Trigger::InView { threshold: 0.5 }));

    assert_eq!(scheduler.phase(handle), Some(Phase::Idle));
    assert_eq!(scheduler.sample(handle), None);

    scheduler.intersection(handle, 0.2);
    assert_eq!(scheduler.phase(handle), Some(Phase::Idle));

    scheduler.intersection(handle, 0.7);
    assert_eq!(scheduler.phase(handle), Some(Phase::Armed));

    scheduler.tick(0.0);
    scheduler.tick(400.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Settled));

    // Scrolling away and back must not restart a latched animation.
    scheduler.intersection(handle, 0.0);
    scheduler.intersection(handle, 1.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Settled));
}

#[test]
fn test_hover_plays_back_on_leave() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("card", fade_spec(Trigger::Hover));

    scheduler.pointer(handle, true);
    scheduler.tick(0.0);
    scheduler.tick(400.0);
    approx(opacity(&scheduler, handle), 1.0);

    scheduler.pointer(handle, false);
    scheduler.tick(500.0);
    scheduler.tick(900.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Settled));
    approx(opacity(&scheduler, handle), 0.0);
}

#[test]
fn test_hover_leave_mid_flight_reverses_from_current_progress() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("card", fade_spec(Trigger::Hover));

    scheduler.pointer(handle, true);
    scheduler.tick(0.0);
    scheduler.tick(120.0);
    approx(opacity(&scheduler, handle), 0.4);

    // Leaving mid-flight must not snap to the far endpoint.
    scheduler.pointer(handle, false);
    approx(opacity(&scheduler, handle), 0.4);

    scheduler.tick(120.0);
    approx(opacity(&scheduler, handle), 0.4);
    scheduler.tick(180.0);
    approx(opacity(&scheduler, handle), 0.2);

    scheduler.tick(300.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Settled));
    approx(opacity(&scheduler, handle), 0.0);
}

#[test]
fn test_click_toggle_mid_flight_is_continuous() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("panel", fade_spec(Trigger::Click));

    scheduler.clicked(handle, RenderMode::Live);
    scheduler.tick(0.0);
    scheduler.tick(150.0);
    approx(opacity(&scheduler, handle), 0.5);

    scheduler.clicked(handle, RenderMode::Live);
    scheduler.tick(150.0);
    approx(opacity(&scheduler, handle), 0.5);
    scheduler.tick(240.0);
    approx(opacity(&scheduler, handle), 0.2);
}

#[test]
fn test_click_ignored_in_edit_mode() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("card", fade_spec(Trigger::Click));

    scheduler.clicked(handle, RenderMode::Edit);
    assert_eq!(scheduler.phase(handle), Some(Phase::Idle));

    scheduler.clicked(handle, RenderMode::Live);
    assert_eq!(scheduler.phase(handle), Some(Phase::Armed));
}

#[test]
fn test_scroll_scrubs_progress() {
    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("hero", fade_spec(Trigger::Scroll));

    scheduler.scrolled(handle, 0.25);
    approx(opacity(&scheduler, handle), 0.25);

    scheduler.scrolled(handle, 0.75);
    approx(opacity(&scheduler, handle), 0.75);

    // Ticks never advance a scrubbed handle.
    scheduler.tick(10_000.0);
    approx(opacity(&scheduler, handle), 0.75);

    scheduler.scrolled(handle, 2.0);
    approx(opacity(&scheduler, handle), 1.0);
}

#[test]
fn test_sequence_stagger_forward() {
    let mut scheduler = AnimationScheduler::new();
    let items = vec![
        ("a".to_string(), fade_spec(Trigger::Mount)),
        ("b".to_string(), fade_spec(Trigger::Mount)),
        ("c".to_string(), fade_spec(Trigger::Mount)),
    ];
    let config = SequenceConfig {
        stagger_delay_ms: 100.0,
        direction: SequenceDirection::Forward,
    };
    let handles = scheduler.schedule_sequence(&items, &config);

    scheduler.tick(0.0);
    scheduler.tick(150.0);
    approx(opacity(&scheduler, handles[0]), 0.5);
    approx(opacity(&scheduler, handles[1]), 50.0 / 300.0);
    approx(opacity(&scheduler, handles[2]), 0.0);
}

#[test]
fn test_sequence_stagger_reverse() {
    let mut scheduler = AnimationScheduler::new();
    let items = vec![
        ("a".to_string(), fade_spec(Trigger::Mount)),
        ("b".to_string(), fade_spec(Trigger::Mount)),
    ];
    let config = SequenceConfig {
        stagger_delay_ms: 100.0,
        direction: SequenceDirection::Reverse,
    };
    let handles = scheduler.schedule_sequence(&items, &config);

    scheduler.tick(0.0);
    scheduler.tick(50.0);
    // The last child starts first when reversed.
    approx(opacity(&scheduler, handles[1]), 50.0 / 300.0);
    approx(opacity(&scheduler, handles[0]), 0.0);
}

#[test]
fn test_parallel_shares_one_delay() {
    let mut scheduler = AnimationScheduler::new();
    let items = vec![
        ("a".to_string(), fade_spec(Trigger::Mount)),
        ("b".to_string(), fade_spec(Trigger::Mount)),
    ];
    let handles = scheduler.schedule_parallel(&items, 100.0);

    scheduler.tick(0.0);
    scheduler.tick(250.0);
    approx(opacity(&scheduler, handles[0]), 0.5);
    approx(opacity(&scheduler, handles[1]), 0.5);
}

#[test]
fn test_infinite_repeat_never_settles() {
    let mut scheduler = AnimationScheduler::new();
    let mut spec = fade_spec(Trigger::Mount);
    spec.repeat = IterationCount::Infinite;
    spec.direction = PlayDirection::Alternate;
    let handle = scheduler.schedule("pulse", spec);

    scheduler.tick(0.0);
    scheduler.tick(10_000.0);
    assert_eq!(scheduler.phase(handle), Some(Phase::Playing));

    // Second cycle plays backwards under alternate direction.
    let mut scheduler2 = AnimationScheduler::new();
    let mut spec2 = fade_spec(Trigger::Mount);
    spec2.repeat = IterationCount::Infinite;
    spec2.direction = PlayDirection::Alternate;
    let h2 = scheduler2.schedule("pulse", spec2);
    scheduler2.tick(0.0);
    scheduler2.tick(450.0);
    approx(opacity(&scheduler2, h2), 0.5);
}

#[test]
fn test_easing_vocabulary_parses() {
    for (text, easing) in [
        ("linear", Easing::Linear),
        ("ease", Easing::Ease),
        ("ease-in", Easing::EaseIn),
        ("ease-out", Easing::EaseOut),
        ("ease-in-out", Easing::EaseInOut),
        ("spring", Easing::Spring),
        ("bounce", Easing::Bounce),
        ("elastic", Easing::Elastic),
    ] {
        assert_eq!(text.parse::<Easing>().expect("parse"), easing);
    }

    let bezier: Easing = "cubic-bezier(0.4, 0.0, 0.2, 1.0)".parse().expect("parse");
    assert_eq!(
        bezier,
        Easing::CubicBezier {
            x1: 0.4,
            y1: 0.0,
            x2: 0.2,
            y2: 1.0
        }
    );
    assert!("wobble".parse::<Easing>().is_err());
}

#[test]
fn test_easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Bounce,
        Easing::Elastic,
    ] {
        assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
    }
}

#[test]
fn test_keyframe_segment_easing_override() {
    let spec = AnimationSpec {
        keyframes: vec![
            Keyframe {
                easing: Some(Easing::Linear),
                ..Keyframe::new(0.0).set("x", 0.0)
            },
            Keyframe::new(0.5).set("x", 10.0),
            Keyframe::new(1.0).set("x", 10.0),
        ],
        easing: Easing::Linear,
        ..AnimationSpec::default()
    };

    let mut scheduler = AnimationScheduler::new();
    let handle = scheduler.schedule("n", spec);
    scheduler.tick(0.0);
    scheduler.tick(75.0);
    // 75ms of 300ms is progress 0.25, halfway through the first segment.
    let values = scheduler.sample(handle).expect("sample");
    approx(values["x"], 5.0);
}

#[test]
fn test_animation_spec_json_shape() {
    let json = serde_json::json!({
        "trigger": { "type": "inView", "threshold": 0.5 },
        "keyframes": [
            { "offset": 0.0, "properties": { "opacity": 0.0 } },
            { "offset": 1.0, "properties": { "opacity": 1.0 } }
        ],
        "duration": 500,
        "delay": 50,
        "easing": "ease-out",
        "repeat": "infinite",
        "direction": "alternate"
    });
    let spec: AnimationSpec = serde_json::from_value(json).expect("deserialize");
    assert_eq!(spec.trigger, Trigger::InView { threshold: 0.5 });
    assert_eq!(spec.duration_ms, 500.0);
    assert_eq!(spec.delay_ms, 50.0);
    assert_eq!(spec.easing, Easing::EaseOut);
    assert_eq!(spec.repeat, IterationCount::Infinite);
    assert_eq!(spec.direction, PlayDirection::Alternate);
}

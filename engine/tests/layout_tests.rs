use engine::layout::{NoMeasure, Rect, Viewport, layout_block};
use engine::model::{
    AlignItems, BlockLayout, Constraints, Direction, Element, JustifyContent, LayoutMode,
    SizeMode, SizeUnit, Sizing,
};

const VIEWPORT: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};

fn px(value: f64) -> SizeMode {
    SizeMode::Fixed {
        value,
        unit: SizeUnit::Px,
    }
}

fn flow(id: &str, width: SizeMode, height: SizeMode) -> Element {
    let mut el = Element::new("group");
    el.id = Some(id.to_string());
    el.layout_mode = LayoutMode::Auto;
    el.sizing = Some(Sizing {
        width: Some(width),
        height: Some(height),
    });
    el
}

fn row(gap: f64) -> BlockLayout {
    BlockLayout {
        direction: Direction::Horizontal,
        gap,
        ..Default::default()
    }
}

#[test]
fn test_fill_distribution_with_gap() {
    let layout = row(10.0);
    let children = vec![
        flow("a", px(50.0), px(20.0)),
        flow("b", SizeMode::Fill, px(20.0)),
        flow("c", SizeMode::Fill, px(20.0)),
    ];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.width, 50.0);
    assert_eq!(boxes[1].rect.width, 115.0);
    assert_eq!(boxes[2].rect.width, 115.0);
    assert_eq!(boxes[0].rect.x, 0.0);
    assert_eq!(boxes[1].rect.x, 60.0);
    assert_eq!(boxes[2].rect.x, 185.0);
    // Fixed cross sizes stick even under default stretch alignment.
    assert_eq!(boxes[0].rect.height, 20.0);
}

#[test]
fn test_fill_portion_weights() {
    let layout = row(0.0);
    let children = vec![
        flow("a", SizeMode::FillPortion { value: 1.0 }, px(20.0)),
        flow("b", SizeMode::FillPortion { value: 2.0 }, px(20.0)),
    ];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.width, 100.0);
    assert_eq!(boxes[1].rect.width, 200.0);
}

#[test]
fn test_negative_remaining_clamps_flexible_to_zero() {
    let layout = row(0.0);
    let children = vec![
        flow("a", px(400.0), px(20.0)),
        flow("b", SizeMode::Fill, px(20.0)),
    ];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.width, 400.0);
    assert_eq!(boxes[1].rect.width, 0.0);
}

#[test]
fn test_rotation_does_not_move_siblings() {
    let layout = row(10.0);
    let straight = vec![
        flow("a", px(50.0), px(20.0)),
        flow("b", px(50.0), px(20.0)),
        flow("c", px(50.0), px(20.0)),
    ];
    let mut rotated = straight.clone();
    rotated[1].rotation = 45.0;

    let bounds = Rect::new(0.0, 0.0, 300.0, 100.0);
    let before = layout_block(&straight, Some(&layout), bounds, VIEWPORT, &NoMeasure);
    let after = layout_block(&rotated, Some(&layout), bounds, VIEWPORT, &NoMeasure);

    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a.rect, b.rect);
    }
    assert_eq!(after[1].rotation, 45.0);
}

#[test]
fn test_absolute_sibling_takes_no_gap_slot() {
    let layout = row(10.0);
    let mut overlay = Element::new("image");
    overlay.id = Some("overlay".to_string());
    overlay.x = Some(10.0);
    overlay.y = Some(10.0);
    overlay.width = Some(50.0);
    overlay.height = Some(50.0);

    let children = vec![
        flow("a", px(50.0), px(20.0)),
        overlay,
        flow("b", px(50.0), px(20.0)),
    ];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    // The second flow child sits right after the first, one gap along.
    assert_eq!(boxes[2].rect.x, 60.0);
    // The absolute child resolved percent geometry against the container.
    assert_eq!(boxes[1].rect, Rect::new(30.0, 10.0, 150.0, 50.0));
}

#[test]
fn test_justify_center() {
    let mut layout = row(10.0);
    layout.justify_content = JustifyContent::Center;
    let children = vec![flow("a", px(50.0), px(20.0)), flow("b", px(50.0), px(20.0))];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.x, 95.0);
    assert_eq!(boxes[1].rect.x, 155.0);
}

#[test]
fn test_align_center_on_cross_axis() {
    let mut layout = row(0.0);
    layout.align_items = AlignItems::Center;
    let children = vec![flow("a", px(50.0), px(20.0))];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.y, 40.0);
}

#[test]
fn test_wrap_starts_new_lines() {
    let mut layout = row(10.0);
    layout.wrap = true;
    let children = vec![
        flow("a", px(60.0), px(10.0)),
        flow("b", px(60.0), px(10.0)),
        flow("c", px(60.0), px(10.0)),
    ];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.y, 0.0);
    assert_eq!(boxes[1].rect.y, 20.0);
    assert_eq!(boxes[2].rect.y, 40.0);
    for b in &boxes {
        assert_eq!(b.rect.x, 0.0);
    }
}

#[test]
fn test_reverse_flips_placement_not_sizes() {
    let mut layout = row(10.0);
    layout.reverse = true;
    let children = vec![flow("a", px(50.0), px(20.0)), flow("b", px(100.0), px(20.0))];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    // "b" is placed first, "a" after it.
    assert_eq!(boxes[1].rect.x, 0.0);
    assert_eq!(boxes[1].rect.width, 100.0);
    assert_eq!(boxes[0].rect.x, 110.0);
    assert_eq!(boxes[0].rect.width, 50.0);
}

#[test]
fn test_hug_container_sums_children_and_gaps() {
    let layout = BlockLayout {
        direction: Direction::Vertical,
        gap: 0.0,
        ..Default::default()
    };

    let mut hugger = flow("hug", px(100.0), SizeMode::Hug);
    hugger.layout = Some(BlockLayout {
        direction: Direction::Vertical,
        gap: 5.0,
        ..Default::default()
    });
    hugger.children = vec![
        flow("x", px(50.0), px(20.0)),
        flow("y", px(50.0), px(20.0)),
    ];

    let boxes = layout_block(
        &[hugger],
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 300.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.height, 45.0);
    assert_eq!(boxes[0].children[0].rect.y, 0.0);
    assert_eq!(boxes[0].children[1].rect.y, 25.0);
}

#[test]
fn test_viewport_units() {
    let layout = row(0.0);
    let children = vec![flow(
        "a",
        SizeMode::Fixed {
            value: 50.0,
            unit: SizeUnit::Vw,
        },
        px(20.0),
    )];
    let boxes = layout_block(
        &children,
        Some(&layout),
        Rect::new(0.0, 0.0, 500.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.width, 195.0);
}

#[test]
fn test_constraints_clamp_resolved_size() {
    let layout = row(0.0);
    let mut child = flow("a", SizeMode::Fill, px(20.0));
    child.constraints = Some(Constraints {
        max_width: Some(80.0),
        ..Default::default()
    });
    let boxes = layout_block(
        &[child],
        Some(&layout),
        Rect::new(0.0, 0.0, 300.0, 100.0),
        VIEWPORT,
        &NoMeasure,
    );

    assert_eq!(boxes[0].rect.width, 80.0);
}

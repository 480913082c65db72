use std::collections::HashMap;

use log::debug;

use crate::animation::{AnimationSpec, IterationCount, PlayDirection, SequenceConfig, SequenceDirection, Trigger, keyframes};
use crate::render::RenderMode;

/// Opaque handle to one scheduled animation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AnimationHandle(u64);

/// Lifecycle of one handle. Transitions happen only inside host-reported
/// events; the scheduler has no timers of its own.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Waiting for its trigger event.
    Idle,
    /// Trigger fired; starts on the next tick so the initial state commits
    /// first.
    Armed,
    Playing,
    Settled,
}

struct HandleState {
    node_id: String,
    spec: AnimationSpec,
    phase: Phase,
    /// Wall-clock ms at which playback begins, delay included.
    start_at: Option<f64>,
    /// Linear time fraction in [0, 1]; easing applies at sample time.
    progress: f64,
    /// Hover/click toggles play the curve backwards.
    reversed: bool,
    /// Progress to continue from when a toggle re-arms a playing handle.
    resume_from: Option<f64>,
    /// InView fires once.
    latched: bool,
}

/// Host-driven animation scheduler.
///
/// Owns the state of every scheduled animation. All methods are cheap and
/// synchronous; cancellation is a map removal and therefore idempotent.
pub struct AnimationScheduler {
    handles: HashMap<AnimationHandle, HandleState>,
    next_id: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, node_id: &str, spec: AnimationSpec) -> AnimationHandle {
        let phase = match spec.trigger {
            Trigger::Mount => Phase::Armed,
            _ => Phase::Idle,
        };
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        self.handles.insert(
            handle,
            HandleState {
                node_id: node_id.to_string(),
                spec,
                phase,
                start_at: None,
                progress: 0.0,
                reversed: false,
                resume_from: None,
                latched: false,
            },
        );
        handle
    }

    /// Schedule a staggered group. Entry i gains `i * staggerDelay` of
    /// extra delay, counted from the far end when the sequence is
    /// reversed.
    pub fn schedule_sequence(
        &mut self,
        items: &[(String, AnimationSpec)],
        config: &SequenceConfig,
    ) -> Vec<AnimationHandle> {
        let n = items.len();
        items
            .iter()
            .enumerate()
            .map(|(i, (node_id, spec))| {
                let slot = match config.direction {
                    SequenceDirection::Forward => i,
                    SequenceDirection::Reverse => n - 1 - i,
                };
                let mut spec = spec.clone();
                spec.delay_ms += slot as f64 * config.stagger_delay_ms;
                self.schedule(node_id, spec)
            })
            .collect()
    }

    /// Schedule a group that starts together after one shared delay.
    pub fn schedule_parallel(
        &mut self,
        items: &[(String, AnimationSpec)],
        shared_delay_ms: f64,
    ) -> Vec<AnimationHandle> {
        items
            .iter()
            .map(|(node_id, spec)| {
                let mut spec = spec.clone();
                spec.delay_ms += shared_delay_ms;
                self.schedule(node_id, spec)
            })
            .collect()
    }

    /// Advance time. Armed handles begin playing; playing handles update
    /// their progress, iteration and settledness.
    pub fn tick(&mut self, now_ms: f64) {
        for state in self.handles.values_mut() {
            match state.phase {
                Phase::Armed => {
                    state.phase = Phase::Playing;
                    match state.resume_from.take() {
                        // A toggled handle continues from where it was, with
                        // no second delay.
                        Some(from) => {
                            state.start_at =
                                Some(now_ms - resume_offset(&state.spec, state.reversed, from));
                            state.progress = from;
                        }
                        None => {
                            state.start_at = Some(now_ms + state.spec.delay_ms);
                            state.progress = initial_progress(state.reversed);
                        }
                    }
                }
                Phase::Playing => {
                    if state.spec.trigger == Trigger::Scroll {
                        // Scrubbed externally.
                        continue;
                    }
                    advance(state, now_ms);
                }
                Phase::Idle | Phase::Settled => {}
            }
        }
    }

    /// Report an intersection ratio for an inView handle. Fires once and
    /// latches.
    pub fn intersection(&mut self, handle: AnimationHandle, ratio: f64) {
        if let Some(state) = self.handles.get_mut(&handle) {
            if let Trigger::InView { threshold } = state.spec.trigger {
                if !state.latched && ratio >= threshold {
                    state.latched = true;
                    state.phase = Phase::Armed;
                    debug!("inView fired for '{}'", state.node_id);
                }
            }
        }
    }

    /// Report pointer enter/leave for a hover handle. Leaving plays the
    /// curve back.
    pub fn pointer(&mut self, handle: AnimationHandle, entered: bool) {
        if let Some(state) = self.handles.get_mut(&handle) {
            if state.spec.trigger == Trigger::Hover {
                if !entered && state.phase == Phase::Idle {
                    return;
                }
                if state.phase == Phase::Playing {
                    state.resume_from = Some(state.progress);
                }
                state.reversed = !entered;
                state.phase = Phase::Armed;
            }
        }
    }

    /// Report a click. Click triggers toggle direction, and only in live
    /// mode; edit-mode clicks belong to selection.
    pub fn clicked(&mut self, handle: AnimationHandle, mode: RenderMode) {
        if mode != RenderMode::Live {
            return;
        }
        if let Some(state) = self.handles.get_mut(&handle) {
            if state.spec.trigger == Trigger::Click {
                if state.phase == Phase::Playing || state.phase == Phase::Settled {
                    state.reversed = !state.reversed;
                }
                if state.phase == Phase::Playing {
                    state.resume_from = Some(state.progress);
                }
                state.phase = Phase::Armed;
            }
        }
    }

    /// Report scroll progress for a scroll handle; progress follows the
    /// ratio monotonically.
    pub fn scrolled(&mut self, handle: AnimationHandle, ratio: f64) {
        if let Some(state) = self.handles.get_mut(&handle) {
            if state.spec.trigger == Trigger::Scroll {
                state.phase = Phase::Playing;
                state.progress = ratio.clamp(0.0, 1.0);
            }
        }
    }

    /// Property values of the handle right now. None once cancelled or
    /// while the trigger has not fired.
    pub fn sample(&self, handle: AnimationHandle) -> Option<HashMap<String, f64>> {
        let state = self.handles.get(&handle)?;
        let progress = match state.phase {
            Phase::Idle => return None,
            Phase::Armed => state
                .resume_from
                .unwrap_or_else(|| initial_progress(state.reversed)),
            Phase::Playing | Phase::Settled => state.progress,
        };
        Some(keyframes::sample(
            &state.spec.keyframes,
            progress,
            state.spec.easing,
        ))
    }

    pub fn phase(&self, handle: AnimationHandle) -> Option<Phase> {
        self.handles.get(&handle).map(|s| s.phase)
    }

    /// Remove the handle. Safe to call any number of times.
    pub fn cancel(&mut self, handle: AnimationHandle) {
        if self.handles.remove(&handle).is_some() {
            debug!("cancelled animation handle {handle:?}");
        }
    }

    /// Drop every handle of a removed node, so conditional and repeat
    /// re-evaluation leaves no orphaned state behind.
    pub fn release_node(&mut self, node_id: &str) {
        self.handles.retain(|_, state| state.node_id != node_id);
    }

    pub fn active_count(&self) -> usize {
        self.handles.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_progress(reversed: bool) -> f64 {
    if reversed { 1.0 } else { 0.0 }
}

/// Elapsed ms that lands first-cycle playback at `progress`, so a toggled
/// handle resumes where it was in its new direction.
fn resume_offset(spec: &AnimationSpec, reversed: bool, progress: f64) -> f64 {
    let oriented = if reversed { 1.0 - progress } else { progress };
    let within = match spec.direction {
        PlayDirection::Normal | PlayDirection::Alternate => oriented,
        PlayDirection::Reverse => 1.0 - oriented,
    };
    within.clamp(0.0, 1.0) * spec.duration_ms.max(0.0)
}

fn advance(state: &mut HandleState, now_ms: f64) {
    let start = match state.start_at {
        Some(start) => start,
        None => return,
    };
    let elapsed = now_ms - start;
    if elapsed < 0.0 {
        state.progress = initial_progress(state.reversed);
        return;
    }

    let duration = state.spec.duration_ms;
    if duration <= 0.0 {
        state.progress = final_progress(&state.spec, state.reversed);
        state.phase = Phase::Settled;
        return;
    }

    let cycle = (elapsed / duration).floor() as u64;
    let finished = match state.spec.repeat {
        IterationCount::Finite(n) => cycle >= n as u64,
        IterationCount::Infinite => false,
    };
    if finished {
        state.progress = final_progress(&state.spec, state.reversed);
        state.phase = Phase::Settled;
        return;
    }

    let within = (elapsed % duration) / duration;
    let mut progress = match state.spec.direction {
        PlayDirection::Normal => within,
        PlayDirection::Reverse => 1.0 - within,
        PlayDirection::Alternate => {
            if cycle % 2 == 0 {
                within
            } else {
                1.0 - within
            }
        }
    };
    if state.reversed {
        progress = 1.0 - progress;
    }
    state.progress = progress;
}

fn final_progress(spec: &AnimationSpec, reversed: bool) -> f64 {
    let end = match spec.direction {
        PlayDirection::Normal => 1.0,
        PlayDirection::Reverse => 0.0,
        PlayDirection::Alternate => match spec.repeat {
            // An odd iteration count ends on the forward leg.
            IterationCount::Finite(n) if n % 2 == 0 => 0.0,
            _ => 1.0,
        },
    };
    if reversed { 1.0 - end } else { end }
}

//! Declarative animation specs and the host-driven trigger scheduler.

pub mod easing;
pub mod keyframes;
pub mod scheduler;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use easing::Easing;
pub use keyframes::Keyframe;
pub use scheduler::{AnimationHandle, AnimationScheduler, Phase};

fn default_threshold() -> f64 {
    0.1
}

/// What starts an animation. The scheduler never observes anything itself;
/// the host reports intersection ratios, pointer and click events, and
/// scroll progress.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Trigger {
    /// Arms at mount, starts on the following tick, fires once.
    #[default]
    Mount,
    /// Fires once the reported intersection ratio crosses the threshold,
    /// then latches.
    InView {
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    /// Reversible: plays forward on enter, back on leave.
    Hover,
    /// Reversible toggle; live mode only, edit-mode clicks select.
    Click,
    /// Progress scrubbed from the reported scroll ratio.
    Scroll,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Finite(1)
    }
}

impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IterationCount::Finite(n) => serializer.serialize_u32(*n),
            IterationCount::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for IterationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Word(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(IterationCount::Finite(n)),
            Raw::Word(w) if w == "infinite" => Ok(IterationCount::Infinite),
            Raw::Word(w) => Err(D::Error::custom(format!("unknown repeat count '{w}'"))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
}

fn default_duration() -> f64 {
    300.0
}

/// A node's animation declaration.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    #[serde(default)]
    pub trigger: Trigger,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
    /// Milliseconds.
    #[serde(rename = "duration", default = "default_duration")]
    pub duration_ms: f64,
    #[serde(rename = "delay", default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub repeat: IterationCount,
    #[serde(default)]
    pub direction: PlayDirection,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            trigger: Trigger::Mount,
            keyframes: Vec::new(),
            duration_ms: default_duration(),
            delay_ms: 0.0,
            easing: Easing::default(),
            repeat: IterationCount::default(),
            direction: PlayDirection::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SequenceDirection {
    #[default]
    Forward,
    Reverse,
}

fn default_stagger() -> f64 {
    100.0
}

/// Staggered group: child i starts `i * staggerDelay` after the group,
/// counted from the other end when reversed.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SequenceConfig {
    #[serde(rename = "staggerDelay", default = "default_stagger")]
    pub stagger_delay_ms: f64,
    #[serde(default)]
    pub direction: SequenceDirection,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            stagger_delay_ms: default_stagger(),
            direction: SequenceDirection::Forward,
        }
    }
}

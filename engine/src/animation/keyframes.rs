use std::collections::{BTreeSet, HashMap};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;

/// One keyframe: a time offset in [0, 1] and the property values it pins.
/// A keyframe-level easing overrides the animation's easing for the
/// segment it starts.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    pub offset: OrderedFloat<f64>,
    pub properties: HashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Keyframe {
    pub fn new(offset: f64) -> Self {
        Self {
            offset: OrderedFloat(offset),
            properties: HashMap::new(),
            easing: None,
        }
    }

    pub fn set(mut self, name: &str, value: f64) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }
}

/// Sample every animated property at `progress`.
///
/// Properties are interpolated independently: a property missing from some
/// keyframes interpolates between the keyframes that do pin it, holding
/// flat before the first and after the last.
pub fn sample(
    keyframes: &[Keyframe],
    progress: f64,
    default_easing: Easing,
) -> HashMap<String, f64> {
    let mut sorted: Vec<&Keyframe> = keyframes.iter().collect();
    sorted.sort_by(|a, b| a.offset.cmp(&b.offset));

    let names: BTreeSet<&str> = sorted
        .iter()
        .flat_map(|k| k.properties.keys().map(String::as_str))
        .collect();

    let mut out = HashMap::with_capacity(names.len());
    for name in names {
        let points: Vec<(f64, f64, Option<Easing>)> = sorted
            .iter()
            .filter_map(|k| k.properties.get(name).map(|v| (k.offset.0, *v, k.easing)))
            .collect();
        if let Some(value) = sample_points(&points, progress, default_easing) {
            out.insert(name.to_string(), value);
        }
    }
    out
}

fn sample_points(
    points: &[(f64, f64, Option<Easing>)],
    progress: f64,
    default_easing: Easing,
) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;
    if progress <= first.0 {
        return Some(first.1);
    }
    if progress >= last.0 {
        return Some(last.1);
    }
    for pair in points.windows(2) {
        let (a_off, a_val, a_ease) = pair[0];
        let (b_off, b_val, _) = pair[1];
        if progress >= a_off && progress <= b_off {
            let span = b_off - a_off;
            if span <= 0.0 {
                return Some(b_val);
            }
            let local = (progress - a_off) / span;
            let eased = a_ease.unwrap_or(default_easing).apply(local);
            return Some(a_val + (b_val - a_val) * eased);
        }
    }
    Some(last.1)
}

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Timing curve vocabulary. Serialized as the CSS-style string form,
/// including `cubic-bezier(x1, y1, x2, y2)`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
    Bounce,
    Elastic,
    CubicBezier {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::EaseIn => bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::Spring => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (-6.0 * t).exp() * (12.0 * t).cos()
                }
            }
            Easing::Bounce => {
                let n1 = 7.5625;
                let d1 = 2.75;
                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t = t - 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    let t = t - 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    let t = t - 2.625 / d1;
                    n1 * t * t + 0.984375
                }
            }
            Easing::Elastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let c4 = (2.0 * std::f64::consts::PI) / 3.0;
                    2.0_f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier(*x1, *y1, *x2, *y2, t),
        }
    }
}

/// CSS cubic bezier: solve the curve's x for the time fraction, return y.
fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Newton iterations on x(u) = t, falling back to bisection.
    let sample = |c1: f64, c2: f64, u: f64| {
        let one = 1.0 - u;
        3.0 * one * one * u * c1 + 3.0 * one * u * u * c2 + u * u * u
    };
    let derivative = |c1: f64, c2: f64, u: f64| {
        let one = 1.0 - u;
        3.0 * one * one * c1 + 6.0 * one * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
    };

    let mut u = t;
    for _ in 0..8 {
        let x = sample(x1, x2, u) - t;
        let d = derivative(x1, x2, u);
        if x.abs() < 1e-7 {
            return sample(y1, y2, u);
        }
        if d.abs() < 1e-7 {
            break;
        }
        u -= x / d;
        u = u.clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..32 {
        u = (lo + hi) / 2.0;
        if sample(x1, x2, u) < t {
            lo = u;
        } else {
            hi = u;
        }
    }
    sample(y1, y2, u)
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::Ease => write!(f, "ease"),
            Easing::EaseIn => write!(f, "ease-in"),
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::EaseInOut => write!(f, "ease-in-out"),
            Easing::Spring => write!(f, "spring"),
            Easing::Bounce => write!(f, "bounce"),
            Easing::Elastic => write!(f, "elastic"),
            Easing::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(Easing::Linear),
            "ease" => Ok(Easing::Ease),
            "ease-in" => Ok(Easing::EaseIn),
            "ease-out" => Ok(Easing::EaseOut),
            "ease-in-out" => Ok(Easing::EaseInOut),
            "spring" => Ok(Easing::Spring),
            "bounce" => Ok(Easing::Bounce),
            "elastic" => Ok(Easing::Elastic),
            other => {
                let inner = other
                    .strip_prefix("cubic-bezier(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .ok_or_else(|| format!("unknown easing '{other}'"))?;
                let parts: Vec<f64> = inner
                    .split(',')
                    .map(|p| p.trim().parse::<f64>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| format!("bad cubic-bezier '{other}': {e}"))?;
                if parts.len() != 4 {
                    return Err(format!("cubic-bezier needs 4 values, got {}", parts.len()));
                }
                Ok(Easing::CubicBezier {
                    x1: parts[0],
                    y1: parts[1],
                    x2: parts[2],
                    y2: parts[3],
                })
            }
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

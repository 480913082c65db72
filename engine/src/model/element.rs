use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::animation::AnimationSpec;
use crate::model::style::Style;

/// One node of the declarative element tree.
///
/// Templates carry optional ids; after preset instantiation every node has a
/// concrete, tree-unique id. `kind` is an open string tag resolved against
/// the renderer registry at paint time.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,

    pub layout_mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<Sizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignItems>,

    // Absolute geometry, percent of the parent box unless `unit` says px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub unit: GeometryUnit,
    pub rotation: f64,
    pub z_index: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<BlockLayout>,

    // Content resolution, highest precedence first: format, binding
    // (then bindingFallback), value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ConditionalConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatConfig>,

    pub style: Style,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub props: serde_json::Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationSpec>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    /// Concrete id; instantiation guarantees presence, templates may omit it.
    pub fn id_or_unnamed(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Auto,
    // Pre-auto-layout documents carry bare x/y geometry.
    #[default]
    Absolute,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeometryUnit {
    #[default]
    Percent,
    Px,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Px,
    Vw,
    Vh,
    Percent,
}

/// Sizing discipline of one axis under auto layout.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SizeMode {
    Fixed {
        value: f64,
        #[serde(default)]
        unit: SizeUnit,
    },
    /// Wrap the content extent.
    Hug,
    /// Take an equal share of the remaining space.
    Fill,
    /// Take a weighted share of the remaining space.
    FillPortion {
        #[serde(default = "default_portion")]
        value: f64,
    },
}

fn default_portion() -> f64 {
    1.0
}

impl SizeMode {
    pub fn is_flexible(&self) -> bool {
        matches!(self, SizeMode::Fill | SizeMode::FillPortion { .. })
    }

    /// Flex weight; `fill` is a portion of weight 1.
    pub fn portion(&self) -> Option<f64> {
        match self {
            SizeMode::Fill => Some(1.0),
            SizeMode::FillPortion { value } => Some(value.max(0.0)),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Sizing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<SizeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<SizeMode>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
}

impl Constraints {
    pub fn clamp_width(&self, w: f64) -> f64 {
        let mut w = w;
        if let Some(min) = self.min_width {
            w = w.max(min);
        }
        if let Some(max) = self.max_width {
            w = w.min(max);
        }
        w
    }

    pub fn clamp_height(&self, h: f64) -> f64 {
        let mut h = h;
        if let Some(min) = self.min_height {
            h = h.max(min);
        }
        if let Some(max) = self.max_height {
            h = h.min(max);
        }
        h
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlignItems {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
}

/// Uniform or per-side padding, whichever the document wrote.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Sides {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        right: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        left: f64,
    },
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Uniform(0.0)
    }
}

impl Padding {
    pub fn top(&self) -> f64 {
        match self {
            Padding::Uniform(v) => *v,
            Padding::Sides { top, .. } => *top,
        }
    }

    pub fn right(&self) -> f64 {
        match self {
            Padding::Uniform(v) => *v,
            Padding::Sides { right, .. } => *right,
        }
    }

    pub fn bottom(&self) -> f64 {
        match self {
            Padding::Uniform(v) => *v,
            Padding::Sides { bottom, .. } => *bottom,
        }
    }

    pub fn left(&self) -> f64 {
        match self {
            Padding::Uniform(v) => *v,
            Padding::Sides { left, .. } => *left,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left() + self.right()
    }

    pub fn vertical(&self) -> f64 {
        self.top() + self.bottom()
    }
}

/// Auto-layout configuration of a container.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockLayout {
    pub direction: Direction,
    pub gap: f64,
    pub padding: Padding,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub wrap: bool,
    pub reverse: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub enum ConditionalOp {
    #[default]
    Exists,
    Equals,
    NotEquals,
    Gt,
    Lt,
    In,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalConfig {
    /// Data path the condition reads.
    pub condition: String,
    #[serde(default)]
    pub operator: ConditionalOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RepeatConfig {
    pub data_path: String,
    /// Scope variable name for the current item.
    #[serde(rename = "as")]
    pub var: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

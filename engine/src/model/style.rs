use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visual attributes of an element.
///
/// Layout reads nothing from here; padding and gap live on `BlockLayout`.
/// Renderers forward the whole style to the paint target, so unrecognized
/// keys survive a roundtrip through `extra`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::element::{BlockLayout, Element};

/// Immutable block template.
///
/// Instantiation deep-clones `default_elements` and assigns deterministic
/// ids; the preset itself is never mutated and may be shared freely.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BlockPreset {
    pub id: String,
    pub block_type: String,
    #[serde(default)]
    pub variant: String,
    /// Data paths this preset expects; documentation for the host editor,
    /// never enforced at render time.
    #[serde(default)]
    pub bindings: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
    /// None means the preset positions its elements absolutely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<BlockLayout>,
    pub default_elements: Vec<Element>,
    /// Host component hooks (lightbox, rsvp form, ...); opaque here.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_components: Vec<String>,
}

impl BlockPreset {
    pub fn new(id: &str, block_type: &str, variant: &str) -> Self {
        Self {
            id: id.to_string(),
            block_type: block_type.to_string(),
            variant: variant.to_string(),
            bindings: HashMap::new(),
            default_height: None,
            layout: None,
            default_elements: Vec::new(),
            special_components: Vec::new(),
        }
    }
}

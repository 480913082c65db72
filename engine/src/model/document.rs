use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::EngineError;
use crate::model::element::{BlockLayout, Element};

fn default_enabled() -> bool {
    true
}

/// One section of a document, usually produced by instantiating a preset.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<BlockLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub elements: Vec<Element>,
}

impl Block {
    pub fn new(block_type: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            block_type: block_type.to_string(),
            preset_id: None,
            enabled: true,
            layout: None,
            height: None,
            elements: Vec::new(),
        }
    }
}

/// A full page: ordered blocks plus the data context they bind against.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub meta: serde_json::Map<String, Value>,
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub data: Value,
}

impl Document {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            meta: serde_json::Map::new(),
            blocks: Vec::new(),
            data: Value::Null,
        }
    }

    pub fn load(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

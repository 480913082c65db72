use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::{Axis, LayoutBox, Viewport};
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintNode, PropControl, PropSpec, RenderContext, base_paint_node,
};

const DEFAULT_SIZE: f64 = 24.0;

pub struct IconRenderer;

impl ElementRenderer for IconRenderer {
    fn kind(&self) -> &str {
        "icon"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content = content_payload(element, &[("name", Value::String(value_text(element)))]);
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "name".to_string(),
                control: PropControl::Text,
                default: json!("heart"),
            },
            PropSpec {
                name: "size".to_string(),
                control: PropControl::Number {
                    min: 8.0,
                    max: 128.0,
                    step: 1.0,
                },
                default: json!(DEFAULT_SIZE),
            },
        ]
    }

    fn measure(&self, element: &Element, _axis: Axis, _viewport: Viewport) -> Option<f64> {
        // Icons are square.
        Some(
            element
                .props
                .get("size")
                .and_then(Value::as_f64)
                .unwrap_or(DEFAULT_SIZE),
        )
    }
}

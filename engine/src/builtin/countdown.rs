use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::LayoutBox;
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintNode, PropControl, PropSpec, RenderContext, base_paint_node,
};

/// Ticking countdown to a target instant. The engine only carries the
/// target timestamp; the paint target owns the clock.
pub struct CountdownRenderer;

impl ElementRenderer for CountdownRenderer {
    fn kind(&self) -> &str {
        "countdown"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content =
            content_payload(element, &[("target", Value::String(value_text(element)))]);
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "target".to_string(),
                control: PropControl::Text,
                default: json!(""),
            },
            PropSpec {
                name: "units".to_string(),
                control: PropControl::Select {
                    options: vec![
                        "days".to_string(),
                        "days-hours".to_string(),
                        "full".to_string(),
                    ],
                },
                default: json!("full"),
            },
        ]
    }
}

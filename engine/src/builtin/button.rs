use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::LayoutBox;
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintAction, PaintNode, PropControl, PropSpec, RenderContext, RenderMode,
    base_paint_node,
};

pub struct ButtonRenderer;

impl ElementRenderer for ButtonRenderer {
    fn kind(&self) -> &str {
        "button"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content =
            content_payload(element, &[("label", Value::String(value_text(element)))]);

        if ctx.mode == RenderMode::Live {
            let action = element
                .props
                .get("action")
                .cloned()
                .unwrap_or(Value::Null);
            node.interaction = Some(PaintAction::Invoke {
                name: "button".to_string(),
                payload: action,
            });
        }
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "label".to_string(),
                control: PropControl::Text,
                default: json!("Button"),
            },
            PropSpec {
                name: "variant".to_string(),
                control: PropControl::Select {
                    options: vec![
                        "primary".to_string(),
                        "secondary".to_string(),
                        "outline".to_string(),
                        "ghost".to_string(),
                    ],
                },
                default: json!("primary"),
            },
        ]
    }
}

use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::LayoutBox;
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintAction, PaintNode, PropControl, PropSpec, RenderContext, RenderMode,
    base_paint_node,
};

pub struct ImageRenderer;

impl ElementRenderer for ImageRenderer {
    fn kind(&self) -> &str {
        "image"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        let src = value_text(element);
        node.content = content_payload(element, &[("src", Value::String(src.clone()))]);

        if ctx.mode == RenderMode::Live {
            // Lightbox opening is the only live image interaction.
            let on_click = element.props.get("onClick").and_then(Value::as_str);
            if on_click == Some("lightbox") {
                node.interaction = Some(PaintAction::Invoke {
                    name: "lightbox".to_string(),
                    payload: json!({ "src": src }),
                });
            }
        }
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "src".to_string(),
                control: PropControl::Text,
                default: json!(""),
            },
            PropSpec {
                name: "objectFit".to_string(),
                control: PropControl::Select {
                    options: vec![
                        "cover".to_string(),
                        "contain".to_string(),
                        "fill".to_string(),
                    ],
                },
                default: json!("cover"),
            },
            PropSpec {
                name: "onClick".to_string(),
                control: PropControl::Select {
                    options: vec!["none".to_string(), "lightbox".to_string()],
                },
                default: json!("none"),
            },
        ]
    }
}

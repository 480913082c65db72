use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::{Axis, LayoutBox, Viewport};
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintNode, PropControl, PropSpec, RenderContext, base_paint_node,
};

const DEFAULT_FONT_SIZE: f64 = 16.0;
// Deterministic stand-in metrics; real shaping happens in the paint target.
const GLYPH_ADVANCE: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.4;

pub struct TextRenderer;

impl ElementRenderer for TextRenderer {
    fn kind(&self) -> &str {
        "text"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content = content_payload(element, &[("text", Value::String(value_text(element)))]);
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "text".to_string(),
                control: PropControl::Text,
                default: json!(""),
            },
            PropSpec {
                name: "fontSize".to_string(),
                control: PropControl::Number {
                    min: 8.0,
                    max: 200.0,
                    step: 1.0,
                },
                default: json!(DEFAULT_FONT_SIZE),
            },
            PropSpec {
                name: "color".to_string(),
                control: PropControl::Color,
                default: json!("#000000"),
            },
            PropSpec {
                name: "textAlign".to_string(),
                control: PropControl::Select {
                    options: vec!["left".to_string(), "center".to_string(), "right".to_string()],
                },
                default: json!("left"),
            },
        ]
    }

    fn measure(&self, element: &Element, axis: Axis, _viewport: Viewport) -> Option<f64> {
        let font_size = element.style.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let text = value_text(element);
        match axis {
            Axis::Horizontal => Some(text.chars().count() as f64 * font_size * GLYPH_ADVANCE),
            Axis::Vertical => Some(font_size * LINE_HEIGHT),
        }
    }
}

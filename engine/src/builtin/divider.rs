use serde_json::json;

use crate::builtin::content_payload;
use crate::error::EngineError;
use crate::layout::{Axis, LayoutBox, Viewport};
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintNode, PropControl, PropSpec, RenderContext, base_paint_node,
};

const DEFAULT_THICKNESS: f64 = 1.0;

pub struct DividerRenderer;

impl ElementRenderer for DividerRenderer {
    fn kind(&self) -> &str {
        "divider"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content = content_payload(element, &[]);
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "thickness".to_string(),
                control: PropControl::Number {
                    min: 1.0,
                    max: 16.0,
                    step: 1.0,
                },
                default: json!(DEFAULT_THICKNESS),
            },
            PropSpec {
                name: "color".to_string(),
                control: PropControl::Color,
                default: json!("#e0e0e0"),
            },
        ]
    }

    fn measure(&self, element: &Element, axis: Axis, _viewport: Viewport) -> Option<f64> {
        let thickness = element
            .props
            .get("thickness")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(DEFAULT_THICKNESS);
        match axis {
            // A divider hugs to its thickness across the flow and spans
            // nothing of its own along it.
            Axis::Vertical => Some(thickness),
            Axis::Horizontal => None,
        }
    }
}

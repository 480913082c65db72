use serde_json::{Value, json};

use crate::builtin::{content_payload, value_text};
use crate::error::EngineError;
use crate::layout::LayoutBox;
use crate::model::Element;
use crate::render::{
    ElementRenderer, PaintNode, PropControl, PropSpec, RenderContext, base_paint_node,
};

/// Month-grid calendar with one highlighted date. The bound value is the
/// ISO date to highlight; the paint target draws the grid.
pub struct CalendarRenderer;

impl ElementRenderer for CalendarRenderer {
    fn kind(&self) -> &str {
        "calendar"
    }

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError> {
        let mut node = base_paint_node(element, bounds, ctx);
        node.content = content_payload(element, &[("date", Value::String(value_text(element)))]);
        Ok(node)
    }

    fn editable_props(&self) -> Vec<PropSpec> {
        vec![
            PropSpec {
                name: "date".to_string(),
                control: PropControl::Text,
                default: json!(""),
            },
            PropSpec {
                name: "accentColor".to_string(),
                control: PropControl::Color,
                default: json!("#c9a227"),
            },
            PropSpec {
                name: "showWeekdays".to_string(),
                control: PropControl::Toggle,
                default: json!(true),
            },
        ]
    }
}

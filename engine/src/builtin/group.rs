use crate::builtin::content_payload;
use crate::error::EngineError;
use crate::layout::LayoutBox;
use crate::model::Element;
use crate::render::{ElementRenderer, PaintNode, RenderContext, base_paint_node};

/// Pure container; paints its background/radius and holds children.
pub struct GroupRenderer;

impl ElementRenderer for GroupRenderer {
    fn kind(&self) -> &str {
        "group"
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
}

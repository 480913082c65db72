use crate::layout::{Rect, Viewport};
use crate::model::{Element, GeometryUnit};

/// Resolve an absolutely positioned element against its parent box.
///
/// Geometry is percent of the parent box by default; an element declaring
/// `unit: px` is taken as page px offsets from the parent origin. Missing
/// x/y default to 0. Constraints clamp the resolved size.
pub fn place(element: &Element, parent: Rect, _viewport: Viewport) -> Rect {
    let x = element.x.unwrap_or(0.0);
    let y = element.y.unwrap_or(0.0);
    let w = element.width.unwrap_or(0.0);
    let h = element.height.unwrap_or(0.0);

    let mut rect = match element.unit {
        GeometryUnit::Percent => Rect::new(
            parent.x + x / 100.0 * parent.width,
            parent.y + y / 100.0 * parent.height,
            w / 100.0 * parent.width,
            h / 100.0 * parent.height,
        ),
        GeometryUnit::Px => Rect::new(parent.x + x, parent.y + y, w, h),
    };

    if let Some(constraints) = &element.constraints {
        rect.width = constraints.clamp_width(rect.width);
        rect.height = constraints.clamp_height(rect.height);
    }
    rect
}

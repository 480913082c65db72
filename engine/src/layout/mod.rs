//! Geometry resolution for the concrete element tree.
//!
//! Two disciplines coexist: flow children of a container with a `layout`
//! config are sized and placed by the auto pass, everything else is
//! positioned absolutely against its parent box. Rotation is applied after
//! layout and never moves a sibling.

pub mod absolute;
pub mod auto;

use serde::Serialize;

use crate::model::{BlockLayout, Direction, Element, LayoutMode, SizeUnit};

/// Axis-aligned box in absolute page coordinates, px.
#[derive(Serialize, Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn of(direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => Axis::Horizontal,
            Direction::Vertical => Axis::Vertical,
        }
    }

    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Intrinsic content size provider for hug sizing of leaves. The renderer
/// registry implements this; layout stays renderer-agnostic.
pub trait Measure {
    fn measure(&self, element: &Element, axis: Axis, viewport: Viewport) -> Option<f64>;
}

/// Measurer that declines every request; hug leaves fall back to zero.
pub struct NoMeasure;

impl Measure for NoMeasure {
    fn measure(&self, _element: &Element, _axis: Axis, _viewport: Viewport) -> Option<f64> {
        None
    }
}

/// Resolved geometry of one node.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBox {
    pub id: String,
    pub kind: String,
    pub rect: Rect,
    pub rotation: f64,
    pub z_index: i32,
    pub children: Vec<LayoutBox>,
}

/// Convert a fixed size declaration into px.
pub fn resolve_fixed(value: f64, unit: SizeUnit, viewport: Viewport, parent_extent: f64) -> f64 {
    match unit {
        SizeUnit::Px => value,
        SizeUnit::Vw => value / 100.0 * viewport.width,
        SizeUnit::Vh => value / 100.0 * viewport.height,
        SizeUnit::Percent => value / 100.0 * parent_extent,
    }
}

/// Lay out one block's elements inside `bounds`.
pub fn layout_block(
    elements: &[Element],
    layout: Option<&BlockLayout>,
    bounds: Rect,
    viewport: Viewport,
    measurer: &dyn Measure,
) -> Vec<LayoutBox> {
    match layout {
        Some(config) => auto::layout_children(bounds, config, elements, viewport, measurer),
        None => elements
            .iter()
            .map(|el| {
                let rect = absolute::place(el, bounds, viewport);
                layout_element(el, rect, viewport, measurer)
            })
            .collect(),
    }
}

/// Lay out one node whose own rect is already resolved, recursing into its
/// children.
pub fn layout_element(
    element: &Element,
    rect: Rect,
    viewport: Viewport,
    measurer: &dyn Measure,
) -> LayoutBox {
    let children = match &element.layout {
        Some(config) => auto::layout_children(rect, config, &element.children, viewport, measurer),
        None => element
            .children
            .iter()
            .map(|child| {
                let child_rect = absolute::place(child, rect, viewport);
                layout_element(child, child_rect, viewport, measurer)
            })
            .collect(),
    };

    LayoutBox {
        id: element.id_or_unnamed().to_string(),
        kind: element.kind.clone(),
        rect,
        rotation: element.rotation,
        z_index: element.z_index,
        children,
    }
}

pub(crate) fn is_flow_child(element: &Element) -> bool {
    element.layout_mode == LayoutMode::Auto
}

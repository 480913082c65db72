use crate::layout::{
    Axis, LayoutBox, Measure, Rect, Viewport, absolute, is_flow_child, layout_element,
    resolve_fixed,
};
use crate::model::{AlignItems, BlockLayout, Element, JustifyContent, SizeMode};

/// Main-axis size class of a flow child before distribution.
#[derive(Clone, Copy, Debug)]
enum MainSize {
    Inflexible(f64),
    Flexible(f64),
}

impl MainSize {
    fn inflexible(self) -> f64 {
        match self {
            MainSize::Inflexible(v) => v,
            MainSize::Flexible(_) => 0.0,
        }
    }
}

struct FlowChild<'a> {
    element: &'a Element,
    index: usize,
    main: MainSize,
    /// Intrinsic cross size; None stretches to the line.
    cross: Option<f64>,
}

/// Lay out the children of an auto container.
///
/// Absolute children never join the flow: they take no gap slot, no
/// alignment slot and no share of the distributed space. Output order is
/// document order.
pub fn layout_children(
    container: Rect,
    layout: &BlockLayout,
    children: &[Element],
    viewport: Viewport,
    measurer: &dyn Measure,
) -> Vec<LayoutBox> {
    let content = Rect::new(
        container.x + layout.padding.left(),
        container.y + layout.padding.top(),
        (container.width - layout.padding.horizontal()).max(0.0),
        (container.height - layout.padding.vertical()).max(0.0),
    );
    let axis = Axis::of(layout.direction);
    let main_extent = extent(content, axis);
    let cross_extent = extent(content, axis.cross());

    let mut placed: Vec<Option<LayoutBox>> = children.iter().map(|_| None).collect();

    // Absolute children position against the container box itself.
    for (index, child) in children.iter().enumerate() {
        if !is_flow_child(child) {
            let rect = absolute::place(child, container, viewport);
            placed[index] = Some(layout_element(child, rect, viewport, measurer));
        }
    }

    let flow: Vec<FlowChild> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| is_flow_child(child))
        .map(|(index, child)| FlowChild {
            element: child,
            index,
            main: main_size(child, axis, main_extent, viewport, measurer),
            cross: intrinsic_cross(child, axis, cross_extent, viewport, measurer),
        })
        .collect();

    // Greedy line breaking; flexible children occupy no space when
    // deciding where a line ends.
    let mut lines: Vec<Vec<FlowChild>> = Vec::new();
    let mut current: Vec<FlowChild> = Vec::new();
    let mut used = 0.0;
    for child in flow {
        let size = child.main.inflexible();
        let needed = if current.is_empty() { size } else { used + layout.gap + size };
        if layout.wrap && !current.is_empty() && needed > main_extent {
            lines.push(std::mem::take(&mut current));
            used = size;
        } else {
            used = needed;
        }
        current.push(child);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut line_base = 0.0;
    let line_count = lines.len();
    for line in lines {
        let line_cross = if line_count > 1 {
            line.iter().filter_map(|c| c.cross).fold(0.0, f64::max)
        } else {
            cross_extent
        };

        let sizes = distribute(&line, layout.gap, main_extent, viewport);
        let n = line.len();
        let total: f64 = sizes.iter().sum::<f64>() + layout.gap * (n.saturating_sub(1)) as f64;
        let leftover = (main_extent - total).max(0.0);

        let (mut cursor, step_extra) = match layout.justify_content {
            JustifyContent::Start => (0.0, 0.0),
            JustifyContent::Center => (leftover / 2.0, 0.0),
            JustifyContent::End => (leftover, 0.0),
            JustifyContent::SpaceBetween => {
                if n > 1 {
                    (0.0, leftover / (n - 1) as f64)
                } else {
                    (0.0, 0.0)
                }
            }
            JustifyContent::SpaceAround => {
                let share = leftover / n as f64;
                (share / 2.0, share)
            }
        };

        // Reverse changes placement order only; sizes are untouched.
        let order: Vec<usize> = if layout.reverse {
            (0..n).rev().collect()
        } else {
            (0..n).collect()
        };

        for slot in order {
            let child = &line[slot];
            let main_size = sizes[slot];
            let (cross_size, cross_offset) =
                cross_placement(child, line_cross, layout.align_items);

            let rect = match axis {
                Axis::Horizontal => Rect::new(
                    content.x + cursor,
                    content.y + line_base + cross_offset,
                    main_size,
                    cross_size,
                ),
                Axis::Vertical => Rect::new(
                    content.x + line_base + cross_offset,
                    content.y + cursor,
                    cross_size,
                    main_size,
                ),
            };
            let rect = clamp(child.element, rect);
            placed[child.index] = Some(layout_element(child.element, rect, viewport, measurer));
            cursor += main_size + layout.gap + step_extra;
        }

        line_base += line_cross + layout.gap;
    }

    placed.into_iter().flatten().collect()
}

/// Split the remaining main-axis space among flexible children by weight.
/// Negative remaining space clamps them all to zero.
fn distribute(line: &[FlowChild], gap: f64, main_extent: f64, _viewport: Viewport) -> Vec<f64> {
    let gaps = gap * line.len().saturating_sub(1) as f64;
    let inflexible: f64 = line.iter().map(|c| c.main.inflexible()).sum();
    let total_weight: f64 = line
        .iter()
        .map(|c| match c.main {
            MainSize::Flexible(w) => w,
            _ => 0.0,
        })
        .sum();
    let remaining = (main_extent - inflexible - gaps).max(0.0);

    line.iter()
        .map(|c| match c.main {
            MainSize::Inflexible(v) => v,
            MainSize::Flexible(w) => {
                if total_weight > 0.0 {
                    remaining * w / total_weight
                } else {
                    0.0
                }
            }
        })
        .collect()
}

fn cross_placement(child: &FlowChild, line_cross: f64, align_items: AlignItems) -> (f64, f64) {
    let align = child.element.align_self.unwrap_or(align_items);
    match child.cross {
        None => (line_cross, 0.0),
        // A declared cross size wins; stretch only fills an undeclared one.
        Some(size) => match align {
            AlignItems::Start | AlignItems::Stretch => (size, 0.0),
            AlignItems::Center => (size, (line_cross - size) / 2.0),
            AlignItems::End => (size, line_cross - size),
        },
    }
}

fn extent(rect: Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => rect.width,
        Axis::Vertical => rect.height,
    }
}

fn size_mode(element: &Element, axis: Axis) -> Option<SizeMode> {
    let sizing = element.sizing?;
    match axis {
        Axis::Horizontal => sizing.width,
        Axis::Vertical => sizing.height,
    }
}

fn main_size(
    element: &Element,
    axis: Axis,
    parent_extent: f64,
    viewport: Viewport,
    measurer: &dyn Measure,
) -> MainSize {
    match size_mode(element, axis) {
        Some(SizeMode::Fixed { value, unit }) => {
            MainSize::Inflexible(resolve_fixed(value, unit, viewport, parent_extent))
        }
        Some(mode) if mode.is_flexible() => MainSize::Flexible(mode.portion().unwrap_or(1.0)),
        // Hug, or an axis the sizing left undeclared.
        _ => MainSize::Inflexible(hug_size(element, axis, viewport, measurer)),
    }
}

fn intrinsic_cross(
    element: &Element,
    axis: Axis,
    cross_extent: f64,
    viewport: Viewport,
    measurer: &dyn Measure,
) -> Option<f64> {
    match size_mode(element, axis.cross()) {
        Some(SizeMode::Fixed { value, unit }) => {
            Some(resolve_fixed(value, unit, viewport, cross_extent))
        }
        Some(SizeMode::Hug) => Some(hug_size(element, axis.cross(), viewport, measurer)),
        // Fill on the cross axis, and an undeclared axis, both stretch.
        _ => None,
    }
}

/// Content extent of a hug-sized node along `axis`.
///
/// Containers sum (or max) their flow children; flexible children count as
/// zero because hug gives them nothing to fill. Leaves ask the measurer.
pub fn hug_size(
    element: &Element,
    axis: Axis,
    viewport: Viewport,
    measurer: &dyn Measure,
) -> f64 {
    if let Some(layout) = &element.layout {
        let flow: Vec<&Element> = element.children.iter().filter(|c| is_flow_child(c)).collect();
        if !flow.is_empty() {
            let own_axis = Axis::of(layout.direction);
            let padding = match axis {
                Axis::Horizontal => layout.padding.horizontal(),
                Axis::Vertical => layout.padding.vertical(),
            };
            let sizes = flow.iter().map(|child| match size_mode(child, axis) {
                Some(SizeMode::Fixed { value, unit }) => resolve_fixed(value, unit, viewport, 0.0),
                Some(mode) if mode.is_flexible() => 0.0,
                _ => hug_size(child, axis, viewport, measurer),
            });
            return if own_axis == axis {
                let total: f64 = sizes.sum();
                total + layout.gap * (flow.len() - 1) as f64 + padding
            } else {
                sizes.fold(0.0, f64::max) + padding
            };
        }
    }
    measurer.measure(element, axis, viewport).unwrap_or(0.0)
}

fn clamp(element: &Element, mut rect: Rect) -> Rect {
    if let Some(constraints) = &element.constraints {
        rect.width = constraints.clamp_width(rect.width);
        rect.height = constraints.clamp_height(rect.height);
    }
    rect
}

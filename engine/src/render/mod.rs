//! Renderer dispatch and the paint-target-agnostic output tree.

pub mod registry;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::error::{EngineError, RenderIssue};
use crate::layout::{Axis, LayoutBox, Rect, Viewport};
use crate::model::Element;

pub use registry::{RegistryBuilder, RendererRegistry};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RenderMode {
    /// Inert content, selection interactions.
    #[default]
    Edit,
    /// Real interactions and animation.
    Live,
}

/// Per-pass render state shared by every dispatch.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    pub mode: RenderMode,
    pub selected_node_id: Option<String>,
}

impl RenderContext {
    pub fn edit() -> Self {
        Self {
            mode: RenderMode::Edit,
            selected_node_id: None,
        }
    }

    pub fn live() -> Self {
        Self {
            mode: RenderMode::Live,
            selected_node_id: None,
        }
    }

    pub fn with_selection(mut self, node_id: &str) -> Self {
        self.selected_node_id = Some(node_id.to_string());
        self
    }

    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected_node_id.as_deref() == Some(node_id)
    }
}

/// What tapping or clicking the painted node does.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaintAction {
    /// Edit mode: every node selects itself.
    SelectNode { id: String },
    /// Live mode: the renderer's own action.
    Invoke { name: String, payload: Value },
}

/// One node of the paint output tree. Content is an opaque JSON payload the
/// paint target interprets per kind.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaintNode {
    pub id: String,
    pub kind: String,
    pub bounds: Rect,
    pub rotation: f64,
    pub z_index: i32,
    pub selected: bool,
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<PaintAction>,
    pub children: Vec<PaintNode>,
}

/// Editable property manifest entry, consumed by the host editor.
#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: String,
    pub control: PropControl,
    pub default: Value,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropControl {
    Text,
    Number { min: f64, max: f64, step: f64 },
    Select { options: Vec<String> },
    Color,
    Toggle,
}

/// A per-kind renderer. Implementations are stateless; everything varying
/// arrives through the element and the context.
pub trait ElementRenderer: Send + Sync {
    fn kind(&self) -> &str;

    fn render(
        &self,
        element: &Element,
        bounds: &LayoutBox,
        ctx: &RenderContext,
    ) -> Result<PaintNode, EngineError>;

    fn editable_props(&self) -> Vec<PropSpec> {
        Vec::new()
    }

    /// Intrinsic content size for hug layout; None declines.
    fn measure(&self, _element: &Element, _axis: Axis, _viewport: Viewport) -> Option<f64> {
        None
    }
}

/// Base paint node carrying the common fields; renderers fill in content
/// and their live interaction.
pub fn base_paint_node(element: &Element, bounds: &LayoutBox, ctx: &RenderContext) -> PaintNode {
    let id = element.id_or_unnamed().to_string();
    let interaction = match ctx.mode {
        RenderMode::Edit => Some(PaintAction::SelectNode { id: id.clone() }),
        RenderMode::Live => None,
    };
    PaintNode {
        selected: ctx.is_selected(&id),
        id,
        kind: element.kind.clone(),
        bounds: bounds.rect,
        rotation: bounds.rotation,
        z_index: bounds.z_index,
        content: Value::Null,
        interaction,
        children: Vec::new(),
    }
}

/// Walk the concrete element tree and its layout tree in lockstep,
/// dispatching each node to its renderer.
///
/// An unknown kind or a renderer error prunes that node (its children
/// included) and records an issue; siblings are unaffected. Children are
/// ordered by z-index for painting, stably so document order breaks ties.
pub fn render_tree(
    registry: &RendererRegistry,
    elements: &[Element],
    boxes: &[LayoutBox],
    ctx: &RenderContext,
    issues: &mut Vec<RenderIssue>,
) -> Vec<PaintNode> {
    let mut nodes = Vec::with_capacity(elements.len());
    for (element, layout) in elements.iter().zip(boxes.iter()) {
        if let Some(node) = render_node(registry, element, layout, ctx, issues) {
            nodes.push(node);
        }
    }
    nodes.sort_by_key(|n| n.z_index);
    nodes
}

fn render_node(
    registry: &RendererRegistry,
    element: &Element,
    layout: &LayoutBox,
    ctx: &RenderContext,
    issues: &mut Vec<RenderIssue>,
) -> Option<PaintNode> {
    let id = element.id_or_unnamed();
    let renderer = match registry.get(&element.kind) {
        Some(renderer) => renderer,
        None => {
            warn!("no renderer for kind '{}' (node '{}')", element.kind, id);
            issues.push(RenderIssue::new(
                id,
                EngineError::UnknownRenderer {
                    kind: element.kind.clone(),
                    node: id.to_string(),
                },
            ));
            return None;
        }
    };

    debug!("dispatch '{}' -> {}", id, element.kind);
    let mut node = match renderer.render(element, layout, ctx) {
        Ok(node) => node,
        Err(error) => {
            warn!("renderer for '{}' failed: {error}", id);
            issues.push(RenderIssue::new(id, error));
            return None;
        }
    };

    node.children = render_tree(registry, &element.children, &layout.children, ctx, issues);
    Some(node)
}

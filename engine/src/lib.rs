pub mod animation;
pub mod binding;
pub mod builtin;
pub mod error;
pub mod evaluate;
pub mod layout;
pub mod model;
pub mod render;

use serde_json::Value;

use crate::animation::AnimationSpec;
use crate::binding::DataContext;
use crate::evaluate::{Expander, RepeatPolicy};
use crate::layout::{Rect, Viewport};
use crate::model::{Block, Document};
use crate::render::{PaintNode, RenderContext, RendererRegistry};

pub use crate::error::{EngineError, RenderIssue};

/// Result of rendering one block.
pub struct RenderOutput {
    pub nodes: Vec<PaintNode>,
    /// Animation declarations of the expanded tree, ready for the
    /// scheduler.
    pub animations: Vec<(String, AnimationSpec)>,
    pub issues: Vec<RenderIssue>,
}

pub struct BlockOutput {
    pub block_id: String,
    pub block_type: String,
    pub bounds: Rect,
    pub nodes: Vec<PaintNode>,
    pub animations: Vec<(String, AnimationSpec)>,
    pub issues: Vec<RenderIssue>,
}

pub struct DocumentOutput {
    pub blocks: Vec<BlockOutput>,
}

/// Render orchestrator: expansion, layout and dispatch over one registry.
pub struct Engine {
    registry: RendererRegistry,
    expander: Expander,
}

impl Engine {
    pub fn new(registry: RendererRegistry) -> Self {
        Self {
            registry,
            expander: Expander::new(),
        }
    }

    pub fn with_builtins() -> Self {
        Self::new(RendererRegistry::with_builtins())
    }

    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.expander = Expander::with_policy(policy);
        self
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Render one block into `bounds`.
    pub fn render_block_at(
        &self,
        block: &Block,
        data: &Value,
        bounds: Rect,
        viewport: Viewport,
        ctx: &RenderContext,
    ) -> RenderOutput {
        let mut issues = Vec::new();
        let mut data_ctx = DataContext::new(data);
        let elements = self.expander.expand_block(&mut data_ctx, block, &mut issues);
        let boxes = layout::layout_block(
            &elements,
            block.layout.as_ref(),
            bounds,
            viewport,
            &self.registry,
        );
        let nodes = render::render_tree(&self.registry, &elements, &boxes, ctx, &mut issues);
        let animations = collect_animations(&elements);
        RenderOutput {
            nodes,
            animations,
            issues,
        }
    }

    pub fn render_block(
        &self,
        block: &Block,
        data: &Value,
        viewport: Viewport,
        ctx: &RenderContext,
    ) -> RenderOutput {
        let height = block.height.unwrap_or(viewport.height);
        let bounds = Rect::new(0.0, 0.0, viewport.width, height);
        self.render_block_at(block, data, bounds, viewport, ctx)
    }

    /// Render a whole document: enabled blocks stacked top to bottom,
    /// disabled blocks skipped.
    pub fn render_document(
        &self,
        document: &Document,
        viewport: Viewport,
        ctx: &RenderContext,
    ) -> DocumentOutput {
        let mut blocks = Vec::new();
        let mut y = 0.0;
        for block in &document.blocks {
            if !block.enabled {
                continue;
            }
            let height = block.height.unwrap_or(viewport.height);
            let bounds = Rect::new(0.0, y, viewport.width, height);
            let output = self.render_block_at(block, &document.data, bounds, viewport, ctx);
            blocks.push(BlockOutput {
                block_id: block.id.clone(),
                block_type: block.block_type.clone(),
                bounds,
                nodes: output.nodes,
                animations: output.animations,
                issues: output.issues,
            });
            y += height;
        }
        DocumentOutput { blocks }
    }
}

/// Collect the animation declarations of an expanded tree, paired with
/// their node ids, in document order. Hosts feed these to the scheduler
/// after mounting the paint output.
pub fn collect_animations(elements: &[model::Element]) -> Vec<(String, AnimationSpec)> {
    let mut out = Vec::new();
    collect_animations_into(elements, &mut out);
    out
}

fn collect_animations_into(elements: &[model::Element], out: &mut Vec<(String, AnimationSpec)>) {
    for element in elements {
        if let Some(spec) = &element.animation {
            out.push((element.id_or_unnamed().to_string(), spec.clone()));
        }
        collect_animations_into(&element.children, out);
    }
}

/// Parse a document from JSON and render it with the built-in renderers.
pub fn render_document_from_json(
    json: &str,
    viewport: Viewport,
    ctx: &RenderContext,
) -> Result<DocumentOutput, EngineError> {
    let document = Document::load(json)?;
    let engine = Engine::with_builtins();
    Ok(engine.render_document(&document, viewport, ctx))
}

const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};

/// CLI entry: read a document JSON file and print the paint tree.
pub fn run(args: Vec<String>) -> Result<(), EngineError> {
    let path = args.get(1).ok_or_else(|| {
        EngineError::InvalidArgument("usage: cli <document.json> [--live]".to_string())
    })?;
    let json = std::fs::read_to_string(path)?;
    let ctx = if args.iter().any(|a| a == "--live") {
        RenderContext::live()
    } else {
        RenderContext::edit()
    };

    let output = render_document_from_json(&json, DEFAULT_VIEWPORT, &ctx)?;
    for block in &output.blocks {
        println!(
            "block {} ({}) at y={} with {} root node(s)",
            block.block_id,
            block.block_type,
            block.bounds.y,
            block.nodes.len()
        );
        println!("{}", serde_json::to_string_pretty(&block.nodes)?);
        for issue in &block.issues {
            eprintln!("issue in '{}': {}", issue.node_id, issue.error);
        }
    }
    Ok(())
}

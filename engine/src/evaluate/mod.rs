//! Tree expansion: preset instantiation, conditional pruning, repeat
//! expansion and content resolution.
//!
//! Expansion runs once per render pass and turns the authored template tree
//! into a concrete tree: control-flow nodes are spliced away, every binding
//! is resolved into the node's `value`, and repeat scopes are closed before
//! the pass returns. Layout and paint only ever see the concrete tree.

pub mod conditional;
pub mod repeat;

use std::collections::HashSet;

use log::warn;

use crate::binding::DataContext;
use crate::error::{EngineError, RenderIssue};
use crate::model::{Block, BlockPreset, Element, LayoutMode, SizeMode};

pub use repeat::RepeatPolicy;

/// Instantiate a preset into a fresh block.
///
/// Elements get deterministic ids derived from the preset id and their
/// structural position, so two instantiations of the same preset produce
/// identical trees. The block id itself is a fresh instance id.
pub fn instantiate_preset(preset: &BlockPreset) -> Block {
    let mut elements = preset.default_elements.clone();
    for (i, element) in elements.iter_mut().enumerate() {
        assign_ids(element, &preset.id, &i.to_string());
    }
    let mut block = Block::new(&preset.block_type);
    block.preset_id = Some(preset.id.clone());
    block.layout = preset.layout;
    block.height = preset.default_height;
    block.elements = elements;
    block
}

fn assign_ids(element: &mut Element, preset_id: &str, path: &str) {
    if element.id.is_none() {
        element.id = Some(format!("{preset_id}-{path}"));
    }
    for (i, child) in element.children.iter_mut().enumerate() {
        assign_ids(child, preset_id, &format!("{path}-{i}"));
    }
}

/// Expansion pass configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Expander {
    pub repeat_policy: RepeatPolicy,
}

impl Expander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(repeat_policy: RepeatPolicy) -> Self {
        Self { repeat_policy }
    }

    /// Expand a block's elements against the data context. Subtrees that
    /// fail validation or resolution are pruned and reported; siblings
    /// always survive.
    pub fn expand_block(
        &self,
        ctx: &mut DataContext,
        block: &Block,
        issues: &mut Vec<RenderIssue>,
    ) -> Vec<Element> {
        let parent_auto = block.layout.is_some();
        let mut out = Vec::new();
        for element in &block.elements {
            out.extend(self.expand_element(ctx, element, parent_auto, issues));
        }
        self.check_unique_ids(&out, issues);
        out
    }

    pub fn expand_element(
        &self,
        ctx: &mut DataContext,
        element: &Element,
        parent_auto: bool,
        issues: &mut Vec<RenderIssue>,
    ) -> Vec<Element> {
        match self.expand_one(ctx, element, parent_auto, issues) {
            Ok(expanded) => expanded,
            Err(error) => {
                warn!("pruning subtree '{}': {error}", element.id_or_unnamed());
                issues.push(RenderIssue::new(element.id_or_unnamed(), error));
                Vec::new()
            }
        }
    }

    fn expand_one(
        &self,
        ctx: &mut DataContext,
        element: &Element,
        parent_auto: bool,
        issues: &mut Vec<RenderIssue>,
    ) -> Result<Vec<Element>, EngineError> {
        // Control-flow wrappers splice their children into the parent, so a
        // pruned wrapper contributes no size and no gap slot.
        if element.kind == "conditional" {
            let config = element.conditional.as_ref().ok_or_else(|| EngineError::Schema {
                node: element.id_or_unnamed().to_string(),
                reason: "conditional node without conditional config".to_string(),
            })?;
            if !conditional::evaluate(ctx, config)? {
                return Ok(Vec::new());
            }
            let mut out = Vec::new();
            for child in &element.children {
                out.extend(self.expand_element(ctx, child, parent_auto, issues));
            }
            return Ok(out);
        }

        if element.kind == "repeat" {
            let config = element.repeat.as_ref().ok_or_else(|| EngineError::Schema {
                node: element.id_or_unnamed().to_string(),
                reason: "repeat node without repeat config".to_string(),
            })?;
            let items =
                repeat::source_items(ctx, element.id_or_unnamed(), config, self.repeat_policy, issues)?;
            let total = items.len();
            let mut out = Vec::new();
            for (index, item) in items.iter().enumerate() {
                let suffix = repeat::item_suffix(config, item, index);
                ctx.push_scope(repeat::iteration_scope(config, item, index, total));
                for child in &element.children {
                    let mut clone = child.clone();
                    repeat::suffix_ids(&mut clone, &suffix);
                    out.extend(self.expand_element(ctx, &clone, parent_auto, issues));
                }
                ctx.pop_scope();
            }
            return Ok(out);
        }

        validate(element, parent_auto)?;

        let mut resolved = element.clone();
        resolved.value = ctx.resolve_content(element)?;
        resolved.binding = None;
        resolved.binding_fallback = None;
        resolved.format = None;

        let child_auto = resolved.layout.is_some();
        let children = std::mem::take(&mut resolved.children);
        for child in &children {
            resolved
                .children
                .extend(self.expand_element(ctx, child, child_auto, issues));
        }
        Ok(vec![resolved])
    }

    fn check_unique_ids(&self, elements: &[Element], issues: &mut Vec<RenderIssue>) {
        let mut seen = HashSet::new();
        for element in elements {
            collect_dup(element, &mut seen, issues);
        }
    }
}

fn collect_dup(element: &Element, seen: &mut HashSet<String>, issues: &mut Vec<RenderIssue>) {
    if let Some(id) = &element.id {
        if !seen.insert(id.clone()) {
            warn!("duplicate element id '{id}' after expansion");
            issues.push(RenderIssue::new(
                id.clone(),
                EngineError::Schema {
                    node: id.clone(),
                    reason: "duplicate id after expansion".to_string(),
                },
            ));
        }
    }
    for child in &element.children {
        collect_dup(child, seen, issues);
    }
}

/// Schema validation at expansion time, scoped to one node.
fn validate(element: &Element, parent_auto: bool) -> Result<(), EngineError> {
    let id = element.id_or_unnamed();

    match element.layout_mode {
        LayoutMode::Auto => {
            if parent_auto {
                let sizing = element.sizing.ok_or_else(|| EngineError::Schema {
                    node: id.to_string(),
                    reason: "auto node without sizing".to_string(),
                })?;
                if sizing.width.is_none() && sizing.height.is_none() {
                    return Err(EngineError::Schema {
                        node: id.to_string(),
                        reason: "sizing declares neither axis".to_string(),
                    });
                }
            } else {
                // Flexible modes need a flow parent to distribute against.
                let flexible = element
                    .sizing
                    .map(|s| {
                        s.width.map(|m| m.is_flexible()).unwrap_or(false)
                            || s.height.map(|m| m.is_flexible()).unwrap_or(false)
                    })
                    .unwrap_or(false);
                if flexible {
                    return Err(EngineError::Schema {
                        node: id.to_string(),
                        reason: "fill sizing under an absolute parent".to_string(),
                    });
                }
            }
            if let Some(sizing) = element.sizing {
                for mode in [sizing.width, sizing.height].into_iter().flatten() {
                    if let SizeMode::Fixed { value, .. } = mode {
                        if !value.is_finite() || value < 0.0 {
                            return Err(EngineError::Schema {
                                node: id.to_string(),
                                reason: format!("invalid fixed size {value}"),
                            });
                        }
                    }
                }
            }
        }
        LayoutMode::Absolute => {
            if element.width.is_none() || element.height.is_none() {
                return Err(EngineError::Schema {
                    node: id.to_string(),
                    reason: "absolute node without width/height".to_string(),
                });
            }
            for v in [element.x, element.y, element.width, element.height]
                .into_iter()
                .flatten()
            {
                if !v.is_finite() {
                    return Err(EngineError::Schema {
                        node: id.to_string(),
                        reason: "non-finite absolute geometry".to_string(),
                    });
                }
            }
        }
    }

    Ok(())
}

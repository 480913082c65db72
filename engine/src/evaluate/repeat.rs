use std::collections::HashMap;

use log::warn;
use serde_json::Value;

use crate::binding::{BindingPath, DataContext};
use crate::error::{EngineError, RenderIssue};
use crate::model::{Element, RepeatConfig};

/// How the repeat expander decides its source is "really empty" and the
/// `defaultValue` sample should stand in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RepeatPolicy {
    /// Only a missing, non-array or zero-length source falls back.
    #[default]
    EmptyArrayOnly,
    /// An array whose items are all empty objects or blank strings also
    /// counts as empty.
    TreatBlankItemsAsEmpty,
}

/// The items a repeat node iterates, after offset/limit slicing and the
/// `defaultValue` fallback.
pub fn source_items(
    ctx: &DataContext,
    node_id: &str,
    config: &RepeatConfig,
    policy: RepeatPolicy,
    issues: &mut Vec<RenderIssue>,
) -> Result<Vec<Value>, EngineError> {
    let resolved = ctx.lookup(&config.data_path)?;

    let mut items = match resolved {
        Some(Value::Array(items)) => items,
        Some(_) => {
            warn!(
                "repeat source '{}' on node '{}' is not an array",
                config.data_path, node_id
            );
            issues.push(RenderIssue::new(
                node_id,
                EngineError::RepeatSource {
                    node: node_id.to_string(),
                    path: config.data_path.clone(),
                },
            ));
            Vec::new()
        }
        None => Vec::new(),
    };

    if is_effectively_empty(&items, policy) {
        items = match &config.default_value {
            Some(Value::Array(sample)) => sample.clone(),
            Some(single) => vec![single.clone()],
            None => Vec::new(),
        };
    }

    let sliced: Vec<Value> = items
        .into_iter()
        .skip(config.offset)
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();
    Ok(sliced)
}

fn is_effectively_empty(items: &[Value], policy: RepeatPolicy) -> bool {
    if items.is_empty() {
        return true;
    }
    match policy {
        RepeatPolicy::EmptyArrayOnly => false,
        RepeatPolicy::TreatBlankItemsAsEmpty => items.iter().all(|item| match item {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }),
    }
}

/// Scope variables for iteration `index` of `total`: the item itself plus
/// `{as}Index`, `{as}First` and `{as}Last`.
pub fn iteration_scope(
    config: &RepeatConfig,
    item: &Value,
    index: usize,
    total: usize,
) -> HashMap<String, Value> {
    let mut scope = HashMap::with_capacity(4);
    scope.insert(config.var.clone(), item.clone());
    scope.insert(format!("{}Index", config.var), Value::from(index as u64));
    scope.insert(format!("{}First", config.var), Value::Bool(index == 0));
    scope.insert(format!("{}Last", config.var), Value::Bool(index + 1 == total));
    scope
}

/// Identity suffix for one iteration: the item's `key` value when the
/// config names one and it resolves, the index otherwise.
pub fn item_suffix(config: &RepeatConfig, item: &Value, index: usize) -> String {
    let Some(key) = &config.key else {
        return index.to_string();
    };
    let resolved = BindingPath::parse(key)
        .ok()
        .and_then(|path| path.resolve(item).cloned());
    match resolved {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => index.to_string(),
    }
}

/// Re-id a cloned iteration subtree so every node stays tree-unique.
pub fn suffix_ids(element: &mut Element, suffix: &str) {
    if let Some(id) = &element.id {
        element.id = Some(format!("{id}-{suffix}"));
    }
    for child in &mut element.children {
        suffix_ids(child, suffix);
    }
}

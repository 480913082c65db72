use serde_json::Value;

use crate::binding::DataContext;
use crate::error::EngineError;
use crate::model::{ConditionalConfig, ConditionalOp};

/// Decide whether a conditional subtree renders.
///
/// `exists` is false for a missing path and for an empty string. The
/// ordering operators require both sides numeric and are false otherwise;
/// `in` requires an array compare value.
pub fn evaluate(ctx: &DataContext, config: &ConditionalConfig) -> Result<bool, EngineError> {
    let resolved = ctx.lookup(&config.condition)?;

    let result = match config.operator {
        ConditionalOp::Exists => match &resolved {
            None => false,
            Some(Value::String(s)) => !s.is_empty(),
            // Any other present value counts, a false boolean and an empty
            // array included.
            Some(_) => true,
        },
        ConditionalOp::Equals => match (&resolved, &config.value) {
            (Some(found), Some(expected)) => loosely_equal(found, expected),
            _ => false,
        },
        ConditionalOp::NotEquals => match (&resolved, &config.value) {
            (Some(found), Some(expected)) => !loosely_equal(found, expected),
            (None, Some(_)) => true,
            _ => false,
        },
        ConditionalOp::Gt => match (as_number(&resolved), config.value.as_ref().and_then(Value::as_f64)) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        },
        ConditionalOp::Lt => match (as_number(&resolved), config.value.as_ref().and_then(Value::as_f64)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        },
        ConditionalOp::In => match (&resolved, &config.value) {
            (Some(found), Some(Value::Array(set))) => set.iter().any(|v| loosely_equal(found, v)),
            _ => false,
        },
    };

    Ok(result)
}

fn as_number(value: &Option<Value>) -> Option<f64> {
    value.as_ref().and_then(Value::as_f64)
}

/// Equality that treats 1 and 1.0 as the same and compares everything else
/// structurally.
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

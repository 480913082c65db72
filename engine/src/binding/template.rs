use serde_json::Value;

use crate::binding::context::DataContext;
use crate::error::EngineError;

/// What to emit for a `{path}` token whose path resolves to nothing.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum MissingBehavior {
    /// Substitute an empty string.
    #[default]
    Remove,
    /// Leave the `{path}` token verbatim.
    Keep,
    /// Substitute a fixed placeholder string.
    Placeholder(String),
}

/// Substitute `{path}` tokens in a format string. `{{` and `}}` escape to
/// literal braces; everything else passes through verbatim.
pub fn resolve_template(ctx: &DataContext, format: &str) -> Result<String, EngineError> {
    resolve_template_with(ctx, format, &MissingBehavior::default())
}

pub fn resolve_template_with(
    ctx: &DataContext,
    format: &str,
    missing: &MissingBehavior,
) -> Result<String, EngineError> {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut token = String::new();
                let mut closed = false;
                for t in chars.by_ref() {
                    if t == '}' {
                        closed = true;
                        break;
                    }
                    token.push(t);
                }
                if !closed {
                    return Err(EngineError::InvalidArgument(format!(
                        "unbalanced '{{' in format string '{format}'"
                    )));
                }
                match ctx.lookup(token.trim())? {
                    Some(value) => out.push_str(&stringify(&value)),
                    None => match missing {
                        MissingBehavior::Remove => {}
                        MissingBehavior::Keep => {
                            out.push('{');
                            out.push_str(&token);
                            out.push('}');
                        }
                        MissingBehavior::Placeholder(p) => out.push_str(p),
                    },
                }
            }
            '}' => {
                return Err(EngineError::InvalidArgument(format!(
                    "stray '}}' in format string '{format}'"
                )));
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Check a format string without resolving it. Returns one message per
/// problem found; an empty vec means the format is well-formed.
pub fn validate_format(format: &str) -> Vec<String> {
    let mut problems = Vec::new();
    let mut chars = format.chars().peekable();
    let mut token_count = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
            }
            '{' => {
                let mut token = String::new();
                let mut closed = false;
                for t in chars.by_ref() {
                    if t == '}' {
                        closed = true;
                        break;
                    }
                    token.push(t);
                }
                if !closed {
                    problems.push("unbalanced '{'".to_string());
                } else if token.trim().is_empty() {
                    problems.push("empty token '{}'".to_string());
                } else {
                    token_count += 1;
                }
            }
            '}' => problems.push("stray '}'".to_string()),
            _ => {}
        }
    }

    if token_count == 0 && problems.is_empty() && !format.contains('{') {
        // A format with no tokens still renders, but is almost always a
        // `value` written in the wrong field.
        problems.push("format contains no tokens".to_string());
    }
    problems
}

/// Human-readable form of a bound value for text substitution.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

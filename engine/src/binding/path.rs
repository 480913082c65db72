use serde_json::Value;

use crate::error::EngineError;

/// One step of a parsed binding path.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A binding path parsed once into segments.
///
/// Accepts both `guests.0.name` and `guests[0].name`; a bare numeric
/// segment indexes an array, a bracketed one always does.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BindingPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl BindingPath {
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        if raw.is_empty() {
            return Err(EngineError::InvalidPath {
                path: raw.to_string(),
                reason: "empty path".to_string(),
            });
        }

        let mut segments = Vec::new();
        for dotted in raw.split('.') {
            if dotted.is_empty() {
                return Err(EngineError::InvalidPath {
                    path: raw.to_string(),
                    reason: "empty segment".to_string(),
                });
            }
            let mut rest = dotted;
            // Leading name part before any bracket.
            if let Some(open) = rest.find('[') {
                let head = &rest[..open];
                if !head.is_empty() {
                    segments.push(Self::name_segment(head));
                }
                rest = &rest[open..];
            } else {
                segments.push(Self::name_segment(rest));
                continue;
            }
            while !rest.is_empty() {
                if !rest.starts_with('[') {
                    return Err(EngineError::InvalidPath {
                        path: raw.to_string(),
                        reason: format!("unexpected '{rest}' after index"),
                    });
                }
                let close = rest.find(']').ok_or_else(|| EngineError::InvalidPath {
                    path: raw.to_string(),
                    reason: "unterminated '['".to_string(),
                })?;
                let inner = &rest[1..close];
                let index = inner.parse::<usize>().map_err(|_| EngineError::InvalidPath {
                    path: raw.to_string(),
                    reason: format!("non-numeric index '{inner}'"),
                })?;
                segments.push(PathSegment::Index(index));
                rest = &rest[close + 1..];
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    fn name_segment(part: &str) -> PathSegment {
        match part.parse::<usize>() {
            Ok(index) => PathSegment::Index(index),
            Err(_) => PathSegment::Key(part.to_string()),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// First segment as a scope variable name, if it is a key.
    pub fn head_key(&self) -> Option<&str> {
        match self.segments.first() {
            Some(PathSegment::Key(k)) => Some(k.as_str()),
            _ => None,
        }
    }

    /// Walk `value` along the segments. Missing keys, out-of-range indices
    /// and an explicit null all resolve to None.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        Self::resolve_segments(&self.segments, value)
    }

    /// Walk skipping the first segment; used for scope-relative lookup.
    pub fn resolve_tail<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        Self::resolve_segments(&self.segments[1..], value)
    }

    fn resolve_segments<'a>(segments: &[PathSegment], value: &'a Value) -> Option<&'a Value> {
        let mut current = value;
        for segment in segments {
            current = match segment {
                PathSegment::Key(key) => current.as_object()?.get(key)?,
                PathSegment::Index(i) => current.as_array()?.get(*i)?,
            };
        }
        if current.is_null() { None } else { Some(current) }
    }
}

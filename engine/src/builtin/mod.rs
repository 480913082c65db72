//! Built-in element renderers.

pub mod button;
pub mod calendar;
pub mod countdown;
pub mod divider;
pub mod group;
pub mod icon;
pub mod image;
pub mod text;

use std::sync::Arc;

use serde_json::Value;

use crate::model::Element;
use crate::render::RegistryBuilder;

pub fn register_builtins(builder: &mut RegistryBuilder) {
    builder
        .register(Arc::new(text::TextRenderer))
        .register(Arc::new(image::ImageRenderer))
        .register(Arc::new(group::GroupRenderer))
        .register(Arc::new(button::ButtonRenderer))
        .register(Arc::new(divider::DividerRenderer))
        .register(Arc::new(icon::IconRenderer))
        .register(Arc::new(calendar::CalendarRenderer))
        .register(Arc::new(countdown::CountdownRenderer));
}

/// Resolved content of an expanded node as a string, for text-like kinds.
pub(crate) fn value_text(element: &Element) -> String {
    match &element.value {
        Some(value) => crate::binding::stringify(value),
        None => String::new(),
    }
}

/// Style plus props folded into one payload object for the paint target.
pub(crate) fn content_payload(element: &Element, extra: &[(&str, Value)]) -> Value {
    let mut map = serde_json::Map::new();
    if !element.style.is_empty() {
        if let Ok(style) = serde_json::to_value(&element.style) {
            map.insert("style".to_string(), style);
        }
    }
    if !element.props.is_empty() {
        map.insert("props".to_string(), Value::Object(element.props.clone()));
    }
    for (key, value) in extra {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

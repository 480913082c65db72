use engine::binding::{BindingPath, DataContext, MissingBehavior, validate_format};
use engine::binding::template::resolve_template_with;
use engine::model::Element;

use serde_json::json;

#[test]
fn test_path_resolution_dot_bracket_and_numeric() {
    let data = json!({
        "guests": [
            { "name": "Ada" },
            { "name": "Grace" }
        ]
    });

    let bracket = BindingPath::parse("guests[1].name").expect("parse");
    assert_eq!(bracket.resolve(&data), Some(&json!("Grace")));

    let numeric = BindingPath::parse("guests.0.name").expect("parse");
    assert_eq!(numeric.resolve(&data), Some(&json!("Ada")));
}

#[test]
fn test_null_and_missing_both_resolve_to_none() {
    let data = json!({ "a": { "b": null } });
    let ctx = DataContext::new(&data);
    assert_eq!(ctx.lookup("a.b").expect("lookup"), None);
    assert_eq!(ctx.lookup("a.c").expect("lookup"), None);
    assert_eq!(ctx.lookup("a.b.deeper").expect("lookup"), None);
}

#[test]
fn test_malformed_paths_are_errors() {
    assert!(BindingPath::parse("").is_err());
    assert!(BindingPath::parse("a..b").is_err());
    assert!(BindingPath::parse("a[1").is_err());
    assert!(BindingPath::parse("a[x]").is_err());
}

#[test]
fn test_binding_fallback_chain() {
    let data = json!({ "couple": { "groomName": "Theo" } });
    let ctx = DataContext::new(&data);

    // Primary misses, fallback hits.
    let mut el = Element::new("text");
    el.binding = Some("couple.brideName".to_string());
    el.binding_fallback = Some("couple.groomName".to_string());
    el.value = Some(json!("placeholder"));
    assert_eq!(ctx.resolve_content(&el).expect("resolve"), Some(json!("Theo")));

    // Primary hits; fallback and value never consulted.
    el.binding = Some("couple.groomName".to_string());
    el.binding_fallback = Some("couple.brideName".to_string());
    assert_eq!(ctx.resolve_content(&el).expect("resolve"), Some(json!("Theo")));

    // Both miss; the literal value stands.
    el.binding = Some("couple.brideName".to_string());
    el.binding_fallback = Some("couple.nickname".to_string());
    assert_eq!(
        ctx.resolve_content(&el).expect("resolve"),
        Some(json!("placeholder"))
    );
}

#[test]
fn test_format_takes_precedence_over_binding() {
    let data = json!({ "a": "left", "b": "right" });
    let ctx = DataContext::new(&data);

    let mut el = Element::new("text");
    el.format = Some("{a} & {b}".to_string());
    el.binding = Some("a".to_string());
    el.value = Some(json!("ignored"));
    assert_eq!(
        ctx.resolve_content(&el).expect("resolve"),
        Some(json!("left & right"))
    );
}

#[test]
fn test_template_missing_path_substitutes_empty() {
    let data = json!({ "name": "Mina" });
    let ctx = DataContext::new(&data);

    let mut el = Element::new("text");
    el.format = Some("Hello {name}, table {table.number}!".to_string());
    assert_eq!(
        ctx.resolve_content(&el).expect("resolve"),
        Some(json!("Hello Mina, table !"))
    );
}

#[test]
fn test_template_escaped_braces() {
    let data = json!({ "n": 3 });
    let ctx = DataContext::new(&data);

    let mut el = Element::new("text");
    el.format = Some("{{literal}} and {n}".to_string());
    assert_eq!(
        ctx.resolve_content(&el).expect("resolve"),
        Some(json!("{literal} and 3"))
    );
}

#[test]
fn test_template_missing_behaviors() {
    let data = json!({});
    let ctx = DataContext::new(&data);

    let keep = resolve_template_with(&ctx, "x{gone}y", &MissingBehavior::Keep).expect("keep");
    assert_eq!(keep, "x{gone}y");

    let placeholder = resolve_template_with(
        &ctx,
        "x{gone}y",
        &MissingBehavior::Placeholder("?".to_string()),
    )
    .expect("placeholder");
    assert_eq!(placeholder, "x?y");
}

#[test]
fn test_validate_format() {
    assert!(validate_format("Hello {name}").is_empty());
    assert!(!validate_format("Hello {name").is_empty());
    assert!(!validate_format("Hello }").is_empty());
    assert!(!validate_format("Hello {}").is_empty());
}

#[test]
fn test_number_and_bool_stringification() {
    let data = json!({ "count": 12, "open": true });
    let ctx = DataContext::new(&data);

    let mut el = Element::new("text");
    el.format = Some("{count} guests, rsvp {open}".to_string());
    assert_eq!(
        ctx.resolve_content(&el).expect("resolve"),
        Some(json!("12 guests, rsvp true"))
    );
}

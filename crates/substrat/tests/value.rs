//! Tests for the `Value` data model and its conversions.

use std::collections::{BTreeMap, HashMap};

use serde_json::json;
use substrat::Value;

// =============================================================================
// Display
// =============================================================================

#[test]
fn null_displays_as_empty() {
    assert_eq!(Value::Null.to_string(), "");
}

#[test]
fn scalars_display_naturally() {
    assert_eq!(Value::from(42).to_string(), "42");
    assert_eq!(Value::from(2.5).to_string(), "2.5");
    assert_eq!(Value::from(3.0).to_string(), "3.0");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from("text").to_string(), "text");
}

#[test]
fn composites_display_as_sorted_compact_json() {
    let mut map = BTreeMap::new();
    map.insert("zeta".to_string(), Value::from(vec![1, 2]));
    map.insert("alpha".to_string(), Value::Null);
    assert_eq!(
        Value::Map(map).to_string(),
        r#"{"alpha":null,"zeta":[1,2]}"#
    );
}

#[test]
fn strings_inside_composites_are_escaped() {
    let value = Value::from(vec!["a\"b"]);
    assert_eq!(value.to_string(), r#"["a\"b"]"#);
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn accessors_match_variants() {
    assert_eq!(Value::from(7).as_number(), Some(7));
    assert_eq!(Value::from(7).as_float(), Some(7.0));
    assert_eq!(Value::from("s").as_string(), Some("s"));
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert_eq!(Value::from("s").as_number(), None);
    assert!(Value::Null.is_null());
    assert!(Value::from(vec![1]).is_container());
    assert!(!Value::from(1).is_container());
}

#[test]
fn child_keys_per_variant() {
    let value: Value = json!({ "b": 1, "a": 2 }).into();
    assert_eq!(value.child_keys(), vec!["a", "b"]);
    assert_eq!(Value::from(vec!["x", "y"]).child_keys(), vec!["0", "1"]);
    assert!(Value::from(1).child_keys().is_empty());
}

#[test]
fn lookup_walks_dotted_paths() {
    let value: Value = json!({ "a": { "b": [10, 20] } }).into();
    assert_eq!(value.lookup("a.b.1"), Some(&Value::from(20)));
    assert_eq!(value.lookup("a.c"), None);
    assert_eq!(value.lookup(""), Some(&value));
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn option_converts_to_null_or_value() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn unsigned_integers_beyond_i64_become_floats() {
    assert_eq!(Value::from(7_u64), Value::Number(7));
    assert_eq!(Value::from(i64::MAX as u64), Value::Number(i64::MAX));
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert!(Value::from(u64::MAX).as_number().is_none());
}

#[test]
fn hash_map_converts_to_map() {
    let map = HashMap::from([("k".to_string(), 1)]);
    let value = Value::from(map);
    assert_eq!(value.lookup("k"), Some(&Value::from(1)));
}

#[test]
fn json_values_convert() {
    let value: Value = json!({
        "n": 1,
        "f": 1.25,
        "s": "str",
        "b": true,
        "z": null,
        "l": [1, "two"]
    })
    .into();
    assert_eq!(value.lookup("n"), Some(&Value::Number(1)));
    assert_eq!(value.lookup("f"), Some(&Value::Float(1.25)));
    assert_eq!(value.lookup("s"), Some(&Value::from("str")));
    assert_eq!(value.lookup("b"), Some(&Value::Bool(true)));
    assert_eq!(value.lookup("z"), Some(&Value::Null));
    assert_eq!(value.lookup("l.1"), Some(&Value::from("two")));
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn deserializes_from_json_text() {
    let value: Value =
        serde_json::from_str(r#"{"a": 1, "b": 2.5, "c": "s", "d": [null, false]}"#).unwrap();
    assert_eq!(value.lookup("a"), Some(&Value::Number(1)));
    assert_eq!(value.lookup("b"), Some(&Value::Float(2.5)));
    assert_eq!(value.lookup("c"), Some(&Value::from("s")));
    assert_eq!(value.lookup("d.0"), Some(&Value::Null));
    assert_eq!(value.lookup("d.1"), Some(&Value::Bool(false)));
}

#[test]
fn serializes_untagged() {
    let value: Value = json!({ "a": [1, null] }).into();
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"a":[1,null]}"#);
}

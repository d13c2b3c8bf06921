//! Walking the nested wiki documents found in the SNPedia export.
//!
//! A SNP page is a tree of objects and arrays (`sections[].paragraphs[]
//! .sentences[]`, `sections[].templates[]`, ...). Rather than hand-writing a
//! loop per path, everything here goes through [collect_keyed], which
//! gathers the elements of every array stored under a given key anywhere
//! below a node, in document order.

use serde_json::{Map, Value};

///
/// Depth-first collection of the elements of every array found under `key`
/// beneath `root`. Matched elements are not searched further.
///
pub fn collect_keyed<'a>(root: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut out = Vec::new();
    walk(root, key, &mut out);
    out
}

fn walk<'a>(node: &'a Value, key: &str, out: &mut Vec<&'a Value>) {
    match node {
        Value::Object(map) => {
            for (k, v) in map {
                match v {
                    Value::Array(items) if k == key => out.extend(items.iter()),
                    _ => walk(v, key, out),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, key, out);
            }
        }
        _ => {}
    }
}

///
/// All sentence texts below `root`, in order.
///
pub fn sentences(root: &Value) -> Vec<&str> {
    collect_keyed(root, "sentences")
        .into_iter()
        .filter_map(|s| match s {
            Value::String(text) => Some(text.as_str()),
            Value::Object(obj) => obj.get("text").and_then(Value::as_str),
            _ => None,
        })
        .collect()
}

///
/// All templates below `root` whose `template` field equals `name`
/// (case insensitive), in order.
///
pub fn templates_named<'a>(root: &'a Value, name: &str) -> Vec<&'a Map<String, Value>> {
    collect_keyed(root, "templates")
        .into_iter()
        .filter_map(Value::as_object)
        .filter(|t| {
            t.get("template")
                .and_then(Value::as_str)
                .is_some_and(|n| n.trim().eq_ignore_ascii_case(name))
        })
        .collect()
}

///
/// A scalar field as a trimmed, non-empty string. Numbers and booleans are
/// rendered; arrays, objects and null give `None`.
///
pub fn field_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_string)
}

pub fn scalar_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// A non-negative integer from a number or a numeric string.
pub fn scalar_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// An array of strings; anything that isn't a string is dropped.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_string).collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

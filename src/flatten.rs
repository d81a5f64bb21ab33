//! Index-collapsing flattening of nested tier payloads.
//!
//! Walks a nested payload and emits dotted key-value entries for merge mode.
//! Only string keys contribute to the dotted path: sequence elements keep
//! the key of the sequence itself, so every element of a list collapses onto
//! the same flattened key. When several leaves land on one key they
//! accumulate into an array in visitation order; a lone leaf stays scalar.

use toml::{Table, Value};

/// Flatten a payload into dotted `(key, value)` entries, in visitation order.
///
/// `{view: {paths: ["p1", "p2"]}}` → `[("view.paths", ["p1", "p2"])]`
/// `{path: "x"}` → `[("path", "x")]`
pub fn flatten_payload(data: &Table) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    for (key, value) in data {
        walk(key, value, &mut out);
    }
    out
}

fn walk(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Table(table) => {
            for (key, child) in table {
                walk(&dotted(prefix, key), child, out);
            }
        }
        Value::Array(items) => {
            // Indices never appear in the flattened key.
            for item in items {
                walk(prefix, item, out);
            }
        }
        leaf => emit(prefix, leaf.clone(), out),
    }
}

fn dotted(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn emit(key: &str, leaf: Value, out: &mut Vec<(String, Value)>) {
    match out.iter_mut().find(|(k, _)| k.as_str() == key) {
        None => out.push((key.to_string(), leaf)),
        Some((_, Value::Array(items))) => items.push(leaf),
        Some((_, slot)) => {
            let first = std::mem::replace(slot, Value::Array(Vec::new()));
            if let Value::Array(items) = slot {
                items.push(first);
                items.push(leaf);
            }
        }
    }
}

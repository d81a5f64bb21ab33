//! Tier application: full overwrite and growth merge.
//!
//! Overwrite mode structurally replaces; merge mode only ever grows. Merge
//! never deletes or replaces pre-existing leaf data: on collision the
//! existing value is promoted to a sequence and the incoming value is
//! appended (or concatenated element-wise if it is itself a sequence).

use toml::{Table, Value};

use crate::flatten::flatten_payload;
use crate::store::ConfigStore;

/// Write every top-level payload key at the store root, replacing whatever
/// was there. Payload keys may themselves be dotted paths.
pub fn apply_overwrite(store: &mut dyn ConfigStore, data: Table) {
    store.bulk_set(data);
}

/// Grow the store with a payload already stripped of its control key.
///
/// Each flattened entry is combined with the existing value at its key:
/// vacant target → direct write (unwrapped); scalar target → promoted to a
/// one-element sequence first; then the incoming value is concatenated
/// (sequence) or appended (scalar).
pub fn apply_merge(store: &mut dyn ConfigStore, data: &Table) {
    for (key, incoming) in flatten_payload(data) {
        let combined = match store.get(&key) {
            Some(existing) if !is_vacant(&existing) => grow(existing, incoming),
            _ => incoming,
        };
        store.set(&key, combined);
    }
}

fn grow(existing: Value, incoming: Value) -> Value {
    let mut items = match existing {
        Value::Array(items) => items,
        scalar => vec![scalar],
    };
    match incoming {
        Value::Array(new_items) => items.extend(new_items),
        scalar => items.push(scalar),
    }
    Value::Array(items)
}

/// Falsy existing values are vacant and get replaced outright.
fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => !b,
        Value::Integer(i) => *i == 0,
        Value::Float(f) => *f == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Table(table) => table.is_empty(),
        Value::Datetime(_) => false,
    }
}

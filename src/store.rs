//! The host-owned configuration tree behind an explicit handle.
//!
//! The loader holds a [`ConfigStore`] reference passed in by the host rather
//! than reaching for ambient global config state. [`MemoryStore`] is the
//! provided implementation; hosts with their own config storage implement
//! the trait directly.

use serde::Serialize;
use toml::{Table, Value};

use crate::error::TierconfError;

/// Mutable access to the shared configuration tree by dotted key path.
pub trait ConfigStore {
    /// Read the value at a dotted path, e.g. `"database.url"`.
    fn get(&self, dotted: &str) -> Option<Value>;

    /// Write a value at a dotted path, creating intermediate tables and
    /// structurally replacing whatever was there before.
    fn set(&mut self, dotted: &str, value: Value);

    /// Write every top-level key of `mapping` via [`set`](Self::set).
    /// Keys may themselves be dotted paths.
    fn bulk_set(&mut self, mapping: Table) {
        for (key, value) in mapping {
            self.set(&key, value);
        }
    }
}

/// In-memory configuration tree rooted at a [`toml::Table`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    root: Table,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing configuration tree.
    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    /// Seed a store from any serializable value (e.g. the host's typed
    /// config struct). The value must serialize to a table.
    pub fn from_serialize<S: Serialize>(source: &S) -> Result<Self, TierconfError> {
        match Value::try_from(source)? {
            Value::Table(root) => Ok(Self { root }),
            _ => Err(TierconfError::SeedNotATable),
        }
    }

    pub fn as_table(&self) -> &Table {
        &self.root
    }

    pub fn into_table(self) -> Table {
        self.root
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, dotted: &str) -> Option<Value> {
        let mut table = &self.root;
        let mut segments = dotted.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                return table.get(segment).cloned();
            }
            table = table.get(segment)?.as_table()?;
        }
        None
    }

    fn set(&mut self, dotted: &str, value: Value) {
        set_nested(&mut self.root, dotted, value);
    }
}

fn set_nested(table: &mut Table, dotted: &str, value: Value) {
    match dotted.split_once('.') {
        None => {
            table.insert(dotted.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = table
                .entry(head)
                .or_insert_with(|| Value::Table(Table::new()));
            // A non-table intermediate is replaced, not merged into.
            if !entry.is_table() {
                *entry = Value::Table(Table::new());
            }
            if let Value::Table(sub) = entry {
                set_nested(sub, rest, value);
            }
        }
    }
}

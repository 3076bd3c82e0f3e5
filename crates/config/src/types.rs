//! Binding types for Hotkey TUI.
//!
//! Responsibilities:
//! - Define `BindingSet`, the ordered mapping from action name to bound key.
//! - Define `Binding`, a single (action, key) pair used by queries.
//!
//! Does NOT handle:
//! - Loading defaults (see `defaults` module).
//! - Persistence or merge rules (see `store` module).
//!
//! Invariants:
//! - `BindingSet` preserves declaration order; iteration follows the order in
//!   which actions were first inserted.
//! - `BindingSet` serializes transparently as a flat JSON object.
//! - Action names are unique; the same key may be bound to several actions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::key::normalize_key;

/// An (action, key) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Action name
    pub action: String,
    /// Normalized key
    pub key: String,
}

impl Binding {
    pub fn new(action: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            key: key.into(),
        }
    }
}

/// Ordered mapping from action name to bound key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingSet {
    bindings: IndexMap<String, String>,
}

impl BindingSet {
    /// Creates an empty binding set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key bound to `action`, if any.
    pub fn get(&self, action: &str) -> Option<&str> {
        self.bindings.get(action).map(String::as_str)
    }

    /// Binds `action` to `key`, returning the previous key.
    ///
    /// Rebinding an existing action keeps its position; new actions are appended.
    pub fn insert(&mut self, action: impl Into<String>, key: impl Into<String>) -> Option<String> {
        self.bindings.insert(action.into(), key.into())
    }

    pub fn contains_action(&self, action: &str) -> bool {
        self.bindings.contains_key(action)
    }

    /// Returns true if `key` (compared in normalized form) is bound to any action.
    pub fn is_bound(&self, key: &str) -> bool {
        let key = normalize_key(key);
        self.bindings.values().any(|bound| normalize_key(bound) == key)
    }

    /// Iterates (action, key) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(a, k)| (a.as_str(), k.as_str()))
    }

    /// Iterates action names in declaration order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns a copy with every key normalized.
    pub fn normalized(&self) -> Self {
        self.iter()
            .map(|(action, key)| (action.to_string(), normalize_key(key)))
            .collect()
    }
}

impl FromIterator<(String, String)> for BindingSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for BindingSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(a, k)| (a.to_string(), k.to_string()))
            .collect()
    }
}

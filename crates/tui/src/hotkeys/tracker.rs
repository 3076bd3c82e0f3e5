//! Pressed-key tracking.
//!
//! Responsibilities:
//! - Maintain the set of keys currently held down.
//! - Derive which bound actions are currently triggered, for display.
//!
//! Does NOT handle:
//! - Deciding which events reach the tracker (see `dispatcher`).
//! - Debouncing or repeat filtering: a repeated key-down re-adds a present key.
//!
//! Invariants:
//! - A key is present iff a key-down was observed after its last key-up.
//! - Keys are stored normalized.

use std::collections::HashSet;

use hotkey_config::{Binding, BindingSet, normalize_key};

/// The set of keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyStateTracker {
    pressed: HashSet<String>,
}

impl KeyStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held. Returns true if it was not held before.
    pub fn on_key_down(&mut self, key: &str) -> bool {
        self.pressed.insert(normalize_key(key))
    }

    /// Marks `key` as released. Returns true if it was held.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        self.pressed.remove(&normalize_key(key))
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&normalize_key(key))
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// All actions whose bound key is currently held, in the binding set's order.
    pub fn triggered_actions(&self, bindings: &BindingSet) -> Vec<Binding> {
        bindings
            .iter()
            .filter(|(_, key)| self.is_pressed(key))
            .map(|(action, key)| Binding::new(action, key))
            .collect()
    }
}

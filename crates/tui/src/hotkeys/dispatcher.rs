//! Single routing point for key-down and key-up events.
//!
//! Responsibilities:
//! - Drop key-downs from text-entry contexts.
//! - Divert the next key-down to the rebind controller while it is armed.
//! - Otherwise suppress default handling for bound keys and track the key.
//!
//! Does NOT handle:
//! - Mapping terminal events to key names (see `input::key_name`).
//! - Rendering; callers redraw when the returned effect asks for it.
//!
//! Invariants:
//! - A key-down consumed by a rebind never reaches the key-state tracker.
//! - Key-ups always reach the tracker.
//! - All state is owned here and mutated only from the UI loop.

use hotkey_config::{Binding, BindingStore, StorageError, normalize_key};

use super::rebind::{RebindController, RebindRequest, Rebound};
use super::tracker::KeyStateTracker;

/// Where a key-down originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    /// Ordinary navigation; hotkeys are live.
    #[default]
    Navigation,
    /// An editable text field has focus; hotkeys are off.
    TextEntry,
}

/// What a key-down did.
#[derive(Debug)]
pub enum KeyDownEffect {
    /// Dropped without side effects.
    Ignored,
    /// Consumed as the new binding for an action.
    Rebound(Rebound),
    /// Recorded as held.
    Tracked,
}

/// Outcome of a key-down.
#[derive(Debug)]
pub struct KeyDown {
    /// Whether the host's own handling of this key must be skipped.
    pub suppress_default: bool,
    pub effect: KeyDownEffect,
}

impl KeyDown {
    fn ignored() -> Self {
        Self {
            suppress_default: false,
            effect: KeyDownEffect::Ignored,
        }
    }

    /// Whether the presentation must be refreshed.
    pub fn needs_refresh(&self) -> bool {
        !matches!(self.effect, KeyDownEffect::Ignored)
    }
}

/// Owns the binding store, the key-state tracker and the rebind controller.
#[derive(Debug)]
pub struct InputDispatcher {
    store: BindingStore,
    tracker: KeyStateTracker,
    rebind: RebindController,
}

impl InputDispatcher {
    pub fn new(store: BindingStore) -> Self {
        Self {
            store,
            tracker: KeyStateTracker::new(),
            rebind: RebindController::new(),
        }
    }

    /// Routes a key-down.
    pub fn on_key_down(&mut self, key: &str, context: InputContext) -> KeyDown {
        if context == InputContext::TextEntry {
            return KeyDown::ignored();
        }

        if self.rebind.is_armed() {
            return match self.rebind.receive_key(key, &mut self.store) {
                Some(rebound) => KeyDown {
                    suppress_default: true,
                    effect: KeyDownEffect::Rebound(rebound),
                },
                None => KeyDown::ignored(),
            };
        }

        let key = normalize_key(key);
        let suppress_default = self.store.is_bound(&key);
        self.tracker.on_key_down(&key);

        KeyDown {
            suppress_default,
            effect: KeyDownEffect::Tracked,
        }
    }

    /// Routes a key-up. Returns true if the pressed set changed.
    pub fn on_key_up(&mut self, key: &str) -> bool {
        self.tracker.on_key_up(key)
    }

    /// Asks the rebind controller to record a new key for `action`.
    pub fn request_rebind(&mut self, action: &str) -> RebindRequest {
        self.rebind.request(action, self.store.bindings())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), StorageError> {
        self.store.reset_to_defaults()
    }

    /// Actions whose bound key is currently held, in binding order.
    pub fn triggered_actions(&self) -> Vec<Binding> {
        self.tracker.triggered_actions(self.store.bindings())
    }

    pub fn store(&self) -> &BindingStore {
        &self.store
    }

    pub fn tracker(&self) -> &KeyStateTracker {
        &self.tracker
    }

    pub fn rebind(&self) -> &RebindController {
        &self.rebind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotkey_config::{MemorySlotStorage, StaticDefaults};

    fn dispatcher() -> InputDispatcher {
        let mut store = BindingStore::new(MemorySlotStorage::new());
        store
            .load_defaults(&StaticDefaults(
                [("jump", "space"), ("crouch", "c")].into_iter().collect(),
            ))
            .unwrap();
        store.initialize().unwrap();
        InputDispatcher::new(store)
    }

    #[test]
    fn test_text_entry_is_ignored() {
        let mut d = dispatcher();
        let outcome = d.on_key_down("space", InputContext::TextEntry);

        assert!(!outcome.suppress_default);
        assert!(matches!(outcome.effect, KeyDownEffect::Ignored));
        assert!(!outcome.needs_refresh());
        assert!(!d.tracker().is_pressed("space"));
    }

    #[test]
    fn test_bound_key_is_suppressed_and_tracked() {
        let mut d = dispatcher();
        let outcome = d.on_key_down("Space", InputContext::Navigation);

        assert!(outcome.suppress_default);
        assert!(matches!(outcome.effect, KeyDownEffect::Tracked));
        assert!(d.tracker().is_pressed("space"));
    }

    #[test]
    fn test_unbound_key_is_tracked_but_not_suppressed() {
        let mut d = dispatcher();
        let outcome = d.on_key_down("x", InputContext::Navigation);

        assert!(!outcome.suppress_default);
        assert!(outcome.needs_refresh());
        assert!(d.tracker().is_pressed("x"));
    }

    #[test]
    fn test_armed_key_is_diverted_to_rebind() {
        let mut d = dispatcher();
        assert_eq!(d.request_rebind("crouch"), RebindRequest::Armed);

        let outcome = d.on_key_down("S", InputContext::Navigation);

        assert!(outcome.suppress_default);
        match outcome.effect {
            KeyDownEffect::Rebound(rebound) => {
                assert_eq!(rebound.action, "crouch");
                assert_eq!(rebound.key, "s");
            }
            other => panic!("expected rebind, got {other:?}"),
        }
        assert!(!d.tracker().is_pressed("s"));
        assert!(!d.rebind().is_armed());
        assert_eq!(d.store().get("crouch"), Some("s"));
    }

    #[test]
    fn test_armed_text_entry_still_ignored() {
        let mut d = dispatcher();
        d.request_rebind("jump");

        let outcome = d.on_key_down("w", InputContext::TextEntry);

        assert!(matches!(outcome.effect, KeyDownEffect::Ignored));
        assert_eq!(d.rebind().armed_for(), Some("jump"));
    }

    #[test]
    fn test_key_up_releases() {
        let mut d = dispatcher();
        d.on_key_down("c", InputContext::Navigation);
        assert!(d.on_key_up("C"));
        assert!(!d.tracker().is_pressed("c"));
        assert!(!d.on_key_up("c"));
    }

    #[test]
    fn test_triggered_actions_scenario() {
        let mut d = dispatcher();
        assert_eq!(d.store().get("jump"), Some("space"));

        d.request_rebind("crouch");
        d.on_key_down("s", InputContext::Navigation);
        assert_eq!(d.store().get("crouch"), Some("s"));
        assert_eq!(d.store().get("jump"), Some("space"));

        d.on_key_down("space", InputContext::Navigation);
        assert!(
            d.triggered_actions()
                .contains(&Binding::new("jump", "space"))
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut d = dispatcher();
        d.request_rebind("jump");
        d.on_key_down("w", InputContext::Navigation);

        d.reset_to_defaults().unwrap();

        assert_eq!(d.store().get("jump"), Some("space"));
        assert_eq!(d.store().bindings(), d.store().defaults());
    }
}

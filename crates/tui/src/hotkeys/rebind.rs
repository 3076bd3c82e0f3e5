//! The rebind state machine.
//!
//! Responsibilities:
//! - Track whether a rebind is in flight and for which action.
//! - Consume the next key as the new binding and return to idle.
//!
//! Does NOT handle:
//! - Routing key events (see `dispatcher`).
//! - Cancelling: once armed, the controller waits for a key indefinitely.
//!
//! Invariants:
//! - At most one action is awaiting a key at a time.
//! - `receive_key` always leaves the controller idle.

use hotkey_config::{BindingSet, BindingStore, StorageError, normalize_key};

/// Rebind controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RebindState {
    #[default]
    Idle,
    /// Waiting for the next key-down to bind to this action.
    AwaitingKey(String),
}

/// Result of asking the controller to record a new key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebindRequest {
    /// The controller is now awaiting a key for the requested action.
    Armed,
    /// A rebind for another action is already in flight; nothing changed.
    AlreadyArmed { pending: String },
    /// The action is not in the active binding set; nothing changed.
    UnknownAction,
}

/// A completed rebind.
#[derive(Debug)]
pub struct Rebound {
    pub action: String,
    /// The new normalized key.
    pub key: String,
    /// Set if the new binding could not be persisted. It is active regardless.
    pub persist_error: Option<StorageError>,
}

/// Two-state machine: idle, or awaiting a key for one action.
#[derive(Debug, Clone, Default)]
pub struct RebindController {
    state: RebindState,
}

impl RebindController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the controller for `action`.
    ///
    /// Rejected while armed for a different action. Re-requesting the pending
    /// action leaves it armed.
    pub fn request(&mut self, action: &str, bindings: &BindingSet) -> RebindRequest {
        match &self.state {
            RebindState::AwaitingKey(pending) if pending != action => {
                tracing::debug!(requested = action, pending = %pending, "Rebind already in flight");
                RebindRequest::AlreadyArmed {
                    pending: pending.clone(),
                }
            }
            RebindState::AwaitingKey(_) => RebindRequest::Armed,
            RebindState::Idle if !bindings.contains_action(action) => {
                tracing::warn!(action, "Rebind requested for unknown action");
                RebindRequest::UnknownAction
            }
            RebindState::Idle => {
                tracing::debug!(action, "Awaiting key for rebind");
                self.state = RebindState::AwaitingKey(action.to_string());
                RebindRequest::Armed
            }
        }
    }

    /// Consumes `key` as the new binding for the pending action.
    ///
    /// Returns `None` if the controller is idle.
    pub fn receive_key(&mut self, key: &str, store: &mut BindingStore) -> Option<Rebound> {
        let RebindState::AwaitingKey(action) = std::mem::take(&mut self.state) else {
            return None;
        };

        let key = normalize_key(key);
        let persist_error = store.set(&action, &key).err();
        if let Some(e) = &persist_error {
            tracing::warn!(action = %action, error = %e, "Rebound hotkey could not be saved");
        }

        Some(Rebound {
            action,
            key,
            persist_error,
        })
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, RebindState::AwaitingKey(_))
    }

    /// The action awaiting a key, if any.
    pub fn armed_for(&self) -> Option<&str> {
        match &self.state {
            RebindState::AwaitingKey(action) => Some(action.as_str()),
            RebindState::Idle => None,
        }
    }

    pub fn state(&self) -> &RebindState {
        &self.state
    }
}

//! The binding store: defaults, active bindings, and persistence.
//!
//! Responsibilities:
//! - Hold the default binding set loaded at startup.
//! - Merge stored overrides over the defaults into the active binding set.
//! - Persist the active set synchronously after every mutation.
//! - Recover from corrupt stored data by reseeding from defaults.
//!
//! Does NOT handle:
//! - Key capture, rebind flow or pressed-key tracking (see the TUI crate).
//! - Conflict detection: two actions may share a key.
//!
//! Invariants:
//! - After `initialize`, every action in the defaults has an entry in the active set.
//! - Keys in the active set are normalized.
//! - In-memory mutations always apply; a storage error only reports that the
//!   write did not reach disk.

use std::path::PathBuf;

use crate::constants::HOTKEYS_SLOT;
use crate::defaults::DefaultsSource;
use crate::error::{ConfigLoadError, StorageError, StorageParseError};
use crate::key::normalize_key;
use crate::storage::SlotStorage;
use crate::types::BindingSet;

/// How `BindingStore::initialize` arrived at the active binding set.
#[derive(Debug)]
pub enum InitOutcome {
    /// Stored bindings were found and merged over the defaults.
    Restored,
    /// Nothing was stored; the defaults were copied and persisted.
    Seeded,
    /// Stored bindings were unreadable; the defaults were copied and persisted.
    Recovered {
        /// Why the stored bindings were rejected.
        error: StorageParseError,
        /// Where the corrupt payload was preserved, if the backend made a backup.
        backup: Option<PathBuf>,
    },
}

/// Owns the default and active binding sets and their durable storage.
pub struct BindingStore {
    defaults: BindingSet,
    active: BindingSet,
    storage: Box<dyn SlotStorage + Send>,
}

impl std::fmt::Debug for BindingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingStore")
            .field("defaults", &self.defaults)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl BindingStore {
    /// Creates an empty store backed by `storage`.
    pub fn new(storage: impl SlotStorage + Send + 'static) -> Self {
        Self {
            defaults: BindingSet::new(),
            active: BindingSet::new(),
            storage: Box::new(storage),
        }
    }

    /// Loads the default binding set from `source`.
    ///
    /// On failure the defaults become empty and the error is returned so the
    /// caller can warn the user; startup continues with no hotkeys.
    pub fn load_defaults(&mut self, source: &dyn DefaultsSource) -> Result<(), ConfigLoadError> {
        match source.fetch() {
            Ok(defaults) => {
                tracing::info!(actions = defaults.len(), "Default hotkeys loaded");
                self.defaults = defaults;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not load default hotkeys; no hotkeys will work");
                self.defaults = BindingSet::new();
                Err(e)
            }
        }
    }

    /// Reads stored bindings and builds the active set.
    ///
    /// Stored keys replace the defaults for the actions they name; stored
    /// actions absent from the defaults are kept after the default actions.
    /// If nothing is stored, or the stored value does not parse, the active set
    /// becomes a copy of the defaults and is persisted immediately.
    ///
    /// # Errors
    ///
    /// Returns an error only if storage could not be read or written. The
    /// active set is populated from the defaults even then.
    pub fn initialize(&mut self) -> Result<InitOutcome, StorageError> {
        let stored = match self.storage.read_slot(HOTKEYS_SLOT) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored hotkeys; using defaults");
                self.active = self.defaults.clone();
                return Err(e);
            }
        };

        let raw = match stored {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::info!("No stored hotkeys; seeding from defaults");
                self.active = self.defaults.clone();
                self.persist()?;
                return Ok(InitOutcome::Seeded);
            }
        };

        match serde_json::from_str::<BindingSet>(&raw) {
            Ok(stored) => {
                self.active = merge(&self.defaults, &stored);
                if self.active != stored {
                    self.persist()?;
                }
                tracing::info!(actions = self.active.len(), "Stored hotkeys restored");
                Ok(InitOutcome::Restored)
            }
            Err(source) => {
                let error = StorageParseError {
                    slot: HOTKEYS_SLOT.to_string(),
                    source,
                };
                tracing::warn!(error = %error, "Stored hotkeys are corrupt; resetting to defaults");
                let backup = self.storage.backup_corrupt_slot(HOTKEYS_SLOT);
                self.active = self.defaults.clone();
                self.persist()?;
                Ok(InitOutcome::Recovered { error, backup })
            }
        }
    }

    /// Returns the key bound to `action`.
    pub fn get(&self, action: &str) -> Option<&str> {
        self.active.get(action)
    }

    /// Binds `action` to `key` (normalized) and persists the active set.
    ///
    /// No check is made that `key` is free; several actions may share it.
    pub fn set(&mut self, action: &str, key: &str) -> Result<(), StorageError> {
        let key = normalize_key(key);
        tracing::info!(action, key = %key, "Hotkey rebound");
        self.active.insert(action, key);
        self.persist()
    }

    /// Replaces the active set with a fresh copy of the defaults and persists it.
    pub fn reset_to_defaults(&mut self) -> Result<(), StorageError> {
        tracing::info!("Hotkeys reset to defaults");
        self.active = self.defaults.clone();
        self.persist()
    }

    /// The active binding set.
    pub fn bindings(&self) -> &BindingSet {
        &self.active
    }

    /// The default binding set.
    pub fn defaults(&self) -> &BindingSet {
        &self.defaults
    }

    /// Returns true if `key` is bound to any action in the active set.
    pub fn is_bound(&self, key: &str) -> bool {
        self.active.is_bound(key)
    }

    /// The underlying storage.
    pub fn storage(&self) -> &dyn SlotStorage {
        self.storage.as_ref()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.active)?;
        self.storage.write_slot(HOTKEYS_SLOT, &json)
    }
}

/// Overlays `stored` on `defaults`, keeping default declaration order first.
fn merge(defaults: &BindingSet, stored: &BindingSet) -> BindingSet {
    let mut merged = defaults.clone();
    for (action, key) in stored.iter() {
        merged.insert(action, normalize_key(key));
    }
    merged
}

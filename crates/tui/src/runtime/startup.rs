//! Startup: from a defaults source and a storage backend to a ready dispatcher.
//!
//! Responsibilities:
//! - Choose the storage backend (ephemeral, explicit directory, platform default).
//! - Load defaults, then initialize the store from storage.
//! - Turn every recoverable startup problem into a warning toast.
//!
//! Does NOT handle:
//! - Terminal setup (see `main.rs`).
//!
//! Invariants:
//! - Startup never fails because of bad defaults or bad stored data; the app
//!   always starts, possibly with no hotkeys.
//! - Defaults are loaded before stored bindings are read.

use std::path::Path;

use anyhow::{Context, Result};
use hotkey_config::{
    BindingStore, DefaultsSource, FileSlotStorage, InitOutcome, MemorySlotStorage, SlotStorage,
    default_storage_dir,
};

use crate::hotkeys::InputDispatcher;
use crate::ui::Toast;

/// Result of startup: the dispatcher and the warnings to show once the UI is up.
pub struct Startup {
    pub dispatcher: InputDispatcher,
    pub warnings: Vec<Toast>,
}

/// Opens the slot storage for this session.
///
/// `ephemeral` wins over `dir`; without either the platform data directory is used.
pub fn open_storage(ephemeral: bool, dir: Option<&Path>) -> Result<Box<dyn SlotStorage + Send>> {
    if ephemeral {
        tracing::info!("Ephemeral session; bindings will not be persisted");
        return Ok(Box::new(MemorySlotStorage::new()));
    }

    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => default_storage_dir().context("Failed to resolve hotkey storage directory")?,
    };
    tracing::info!(dir = %dir.display(), "Using hotkey storage directory");
    Ok(Box::new(FileSlotStorage::new(dir)))
}

/// Builds the dispatcher: defaults first, then stored bindings.
pub fn build_dispatcher(
    defaults: &dyn DefaultsSource,
    storage: Box<dyn SlotStorage + Send>,
) -> Startup {
    let mut warnings = Vec::new();
    let mut store = BindingStore::new(storage);

    if let Err(e) = store.load_defaults(defaults) {
        warnings.push(Toast::warning(format!(
            "{e}. No default hotkeys are available."
        )));
    }

    match store.initialize() {
        Ok(InitOutcome::Restored) | Ok(InitOutcome::Seeded) => {}
        Ok(InitOutcome::Recovered { error, backup }) => {
            let mut message = format!("{error}. Hotkeys were reset to defaults.");
            if let Some(backup) = backup {
                message.push_str(&format!(" Old settings saved to {}.", backup.display()));
            }
            warnings.push(Toast::warning(message));
        }
        Err(e) => {
            warnings.push(Toast::warning(format!(
                "{e}. Changes to hotkeys may not be saved."
            )));
        }
    }

    Startup {
        dispatcher: InputDispatcher::new(store),
        warnings,
    }
}

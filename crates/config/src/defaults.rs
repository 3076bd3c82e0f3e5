//! Default binding sources.
//!
//! Responsibilities:
//! - Define the `DefaultsSource` seam for fetching the default binding set.
//! - Read the defaults document (`default.json`) from disk.
//!
//! Does NOT handle:
//! - Merging defaults with stored overrides (see `store` module).
//! - Falling back on failure: callers decide (the store empties its defaults).
//!
//! Invariants:
//! - The document is a flat JSON object of `action -> key`; anything else is a
//!   `ConfigLoadError::Parse`.
//! - Keys are normalized on load; action order follows the document.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_DEFAULTS_FILE;
use crate::error::ConfigLoadError;
use crate::types::BindingSet;

/// A source for the default binding set, read once at startup.
pub trait DefaultsSource {
    /// Fetch and parse the default binding set.
    fn fetch(&self) -> Result<BindingSet, ConfigLoadError>;
}

/// Defaults read from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileDefaults {
    path: PathBuf,
}

impl FileDefaults {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the defaults document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_DEFAULTS_FILE)
    }
}

impl DefaultsSource for FileDefaults {
    fn fetch(&self) -> Result<BindingSet, ConfigLoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigLoadError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let defaults =
            serde_json::from_str::<BindingSet>(&content).map_err(|e| ConfigLoadError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            actions = defaults.len(),
            "Loaded default hotkeys"
        );

        Ok(defaults.normalized())
    }
}

/// Defaults held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticDefaults(pub BindingSet);

impl DefaultsSource for StaticDefaults {
    fn fetch(&self) -> Result<BindingSet, ConfigLoadError> {
        Ok(self.0.normalized())
    }
}

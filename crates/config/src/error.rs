//! Error types for binding configuration and storage.
//!
//! Responsibilities:
//! - Define error variants for loading the defaults document.
//! - Define error variants for reading, parsing and writing the storage slot.
//!
//! Does NOT handle:
//! - Presenting errors to the user (see the TUI crate's toasts).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, slot names).
//! - Every error here is non-fatal to the application: callers degrade and warn.

use std::path::PathBuf;
use thiserror::Error;

/// The defaults document could not be loaded.
///
/// On this error the store's defaults become empty, so no hotkey fires and a
/// later reset yields an empty set until the source is fixed.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to read default hotkey file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse default hotkey file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The persisted binding set could not be parsed.
#[derive(Error, Debug)]
#[error("Stored hotkey settings in slot '{slot}' are not valid: {source}")]
pub struct StorageParseError {
    pub slot: String,
    #[source]
    pub source: serde_json::Error,
}

/// Durable storage failed to read or write a slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read storage slot '{slot}' at {path}: {source}")]
    Read {
        slot: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write storage slot '{slot}' at {path}: {source}")]
    Write {
        slot: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize hotkey settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to determine storage directory: {0}")]
    DirUnavailable(String),
}

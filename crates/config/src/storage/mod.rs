//! Durable local storage for hotkey settings.
//!
//! Responsibilities:
//! - Define the `SlotStorage` seam: named slots holding serialized strings.
//! - Provide a file-backed implementation (one JSON file per slot).
//! - Provide an in-memory implementation for ephemeral sessions and tests.
//! - Back up corrupt slot payloads before they are overwritten.
//!
//! Does NOT handle:
//! - Parsing slot contents (see `store` module).
//! - Deciding when to persist (every binding mutation persists synchronously).
//!
//! Invariants:
//! - Reading a slot that was never written is `Ok(None)`, not an error.
//! - File writes are atomic (temp file + rename).
//! - Corrupt payloads are backed up before being overwritten when the backend can.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

mod file;
mod memory;
mod path;

pub use file::FileSlotStorage;
pub use memory::MemorySlotStorage;
pub use path::default_storage_dir;

/// Key/value storage of named string slots.
pub trait SlotStorage {
    /// Read the raw contents of `slot`, or `None` if it has never been written.
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace the contents of `slot`.
    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Preserve the current (corrupt) contents of `slot` before it is overwritten.
    ///
    /// Returns the backup location if one was made. Backends without a notion
    /// of backups return `None`.
    fn backup_corrupt_slot(&mut self, _slot: &str) -> Option<PathBuf> {
        None
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        (**self).read_slot(slot)
    }

    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        (**self).write_slot(slot, value)
    }

    fn backup_corrupt_slot(&mut self, slot: &str) -> Option<PathBuf> {
        (**self).backup_corrupt_slot(slot)
    }
}

/// Creates a backup of a corrupt slot file before it is overwritten.
///
/// The backup is created by renaming the original file to a path with a
/// `.corrupt.{timestamp}` extension, preserving the original contents for
/// recovery.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}

//! File-backed slot storage.
//!
//! Each slot is a file `<dir>/<slot>.json`. Writes go to a temporary file
//! first and are renamed into place.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::{SlotStorage, create_corrupt_backup};

/// Slot storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path backing `slot`.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                slot: slot.to_string(),
                path,
                source: e,
            }),
        }
    }

    fn write_slot(&mut self, slot: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(slot);
        let write_err = |source| StorageError::Write {
            slot: slot.to_string(),
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, value).map_err(write_err)?;
        std::fs::rename(&temp_path, &path).map_err(write_err)?;

        tracing::debug!(slot, path = %path.display(), "Storage slot saved atomically");

        Ok(())
    }

    fn backup_corrupt_slot(&mut self, slot: &str) -> Option<PathBuf> {
        let path = self.slot_path(slot);
        match create_corrupt_backup(&path) {
            Ok(backup) => {
                tracing::warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    "Backed up corrupt hotkey settings"
                );
                Some(backup)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not back up corrupt hotkey settings; they will be overwritten"
                );
                None
            }
        }
    }
}

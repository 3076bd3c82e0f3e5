//! Path helpers for the storage directory.
//!
//! Responsibilities:
//! - Determine the platform-appropriate directory for slot files.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::StorageError;

/// Returns the default directory holding storage slots.
///
/// - Linux: `~/.local/share/hotkey-tui`
/// - macOS: `~/Library/Application Support/hotkey-tui`
/// - Windows: `%AppData%\hotkey-tui\data`
pub fn default_storage_dir() -> Result<PathBuf, StorageError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        StorageError::DirUnavailable("no home directory for the current user".to_string())
    })?;

    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_dir_matches_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", APP_NAME)
            .unwrap()
            .data_dir()
            .to_path_buf();

        assert_eq!(default_storage_dir().unwrap(), expected);
    }
}

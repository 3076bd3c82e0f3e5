//! `.env` loading.
//!
//! Responsibilities:
//! - Load a `.env` file from the working directory before CLI parsing so that
//!   `HOTKEY_*` variables can be kept alongside the defaults document.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - `DOTENV_DISABLED=1` (or `true`) skips loading entirely.
//! - Errors never include raw `.env` line contents.

use std::io::ErrorKind;
use thiserror::Error;

use crate::constants::ENV_DOTENV_DISABLED;

/// Errors from loading the `.env` file.
#[derive(Error, Debug)]
pub enum DotenvError {
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` if present.
pub fn load_dotenv() -> Result<(), DotenvError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(DotenvError::Parse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(DotenvError::Io {
            kind: io_err.kind(),
        }),
        Err(_) => Err(DotenvError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_disabled_skips_loading() {
        temp_env::with_var(ENV_DOTENV_DISABLED, Some("1"), || {
            assert!(dotenv_disabled());
            assert!(load_dotenv().is_ok());
        });
    }

    #[test]
    #[serial]
    fn test_disabled_accepts_true() {
        temp_env::with_var(ENV_DOTENV_DISABLED, Some("true"), || {
            assert!(dotenv_disabled());
        });
    }

    #[test]
    #[serial]
    fn test_not_disabled_by_default() {
        temp_env::with_var_unset(ENV_DOTENV_DISABLED, || {
            assert!(!dotenv_disabled());
        });
    }
}

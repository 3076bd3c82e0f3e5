//! Command-line argument parsing for hotkey-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Loading defaults or stored bindings (see `runtime::startup`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use hotkey_config::constants::{DEFAULT_DEFAULTS_FILE, DEFAULT_RELEASE_TIMEOUT_MS};
use std::path::PathBuf;

/// Command-line arguments for hotkey-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --defaults, --storage-dir)
/// 2. Environment variables (e.g., HOTKEY_DEFAULTS_PATH, HOTKEY_STORAGE_DIR)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "hotkey-tui",
    about = "Terminal hotkey manager with rebindable, persisted key bindings",
    version,
    after_help = "Examples:\n  hotkey-tui\n  hotkey-tui --defaults ./bindings/default.json\n  hotkey-tui --storage-dir /tmp/hotkeys --log-dir /var/log/hotkey-tui\n  hotkey-tui --ephemeral\n"
)]
pub struct Cli {
    /// Path to the JSON document of default bindings
    #[arg(long, env = "HOTKEY_DEFAULTS_PATH", default_value = DEFAULT_DEFAULTS_FILE)]
    pub defaults: PathBuf,

    /// Directory holding persisted bindings (defaults to the platform data directory)
    #[arg(long, env = "HOTKEY_STORAGE_DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Keep bindings in memory only; nothing is read from or written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Milliseconds without a repeat before a held key counts as released,
    /// on terminals that do not report key releases
    #[arg(long, default_value_t = DEFAULT_RELEASE_TIMEOUT_MS)]
    pub release_timeout_ms: u64,
}

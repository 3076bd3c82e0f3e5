//! Centralized constants for the Hotkey TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Storage & Defaults
// =============================================================================

/// Name of the durable storage slot holding the active binding set.
pub const HOTKEYS_SLOT: &str = "hotkeys";

/// Default file name of the defaults document, resolved against the working directory.
pub const DEFAULT_DEFAULTS_FILE: &str = "default.json";

/// Application name used for platform directories and log files.
pub const APP_NAME: &str = "hotkey-tui";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// UI Defaults
// =============================================================================

/// UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Time a key stays pressed without a repeat before a release is synthesized,
/// for terminals that never report key releases.
pub const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 300;

/// Capacity of the bounded action channel between the input task and the UI loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

//! Key identifier normalization.
//!
//! Responsibilities:
//! - Produce the canonical lowercase form used for comparison and storage.
//! - Produce the display form shown in the UI.
//!
//! Does NOT handle:
//! - Mapping terminal key codes to identifiers (see the TUI crate).
//! - Multi-key chords or per-platform key-code normalization.

/// Canonical name of the space bar.
pub const SPACE: &str = "space";

/// Normalize a key identifier for comparison and storage.
///
/// Lowercases the identifier as reported by the input subsystem. A bare
/// space character is the space bar and maps to `space`, so documents that
/// store the printed character still match. No further mapping is applied:
/// arrow keys, function keys and modifiers keep their raw names.
///
/// # Examples
///
/// ```
/// use hotkey_config::key::normalize_key;
///
/// assert_eq!(normalize_key("Space"), "space");
/// assert_eq!(normalize_key("ArrowUp"), "arrowup");
/// assert_eq!(normalize_key(" "), "space");
/// ```
pub fn normalize_key(key: &str) -> String {
    if key == " " {
        return SPACE.to_string();
    }
    key.to_lowercase()
}

/// Display form of a key: the normalized identifier in uppercase, quoted.
pub fn display_key(key: &str) -> String {
    format!("'{}'", normalize_key(key).to_uppercase())
}

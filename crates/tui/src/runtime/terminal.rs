//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Manage raw mode, alternate screen and keyboard enhancement cleanup via Drop.
//! - Name the keyboard enhancement flags requested at setup.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags},
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Keyboard enhancement flags pushed when the terminal supports them.
///
/// Release events need `REPORT_EVENT_TYPES`. Bare modifier presses are only
/// reported with `REPORT_ALL_KEYS_AS_ESCAPE_CODES`, which in turn relies on
/// disambiguated escape codes. Alternate keys keep shifted characters named
/// by what they type.
pub fn keyboard_enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
}

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Must be created after terminal setup is complete
/// - Must live for the duration of the TUI session
/// - Drop implementation must not panic
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `keyboard_enhanced` - Whether keyboard enhancement flags were pushed during setup
    pub fn new(keyboard_enhanced: bool) -> Self {
        Self { keyboard_enhanced }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: we're in drop and must not panic.
        let mut stdout = std::io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

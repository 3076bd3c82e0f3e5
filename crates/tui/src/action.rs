//! Actions flowing through the UI loop.
//!
//! Responsibilities:
//! - Define every event the main loop applies to `App`: raw terminal input,
//!   ticks, and the presentation events of the settings panel.
//!
//! Does NOT handle:
//! - Deciding which key produces which action (see `input` and `app::input`).

use crossterm::event::KeyEvent;

/// An event applied to the application state on the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key press, repeat or release from the terminal.
    Input(KeyEvent),
    /// Periodic UI tick (toast expiry, synthesized key releases).
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
    /// Exit the application.
    Quit,
    /// Open the settings panel.
    OpenSettings,
    /// Close the settings panel.
    CloseSettings,
    /// Move the settings cursor down.
    SelectNext,
    /// Move the settings cursor up.
    SelectPrevious,
    /// Record a new key for the action under the settings cursor.
    RecordSelected,
    /// Record a new key for the named action.
    RecordKey(String),
    /// Ask for confirmation before resetting every binding.
    OpenResetConfirm,
    /// Reset every binding to its default.
    ResetToDefaults,
    /// Dismiss the reset confirmation without resetting.
    DismissPopup,
    /// Give keyboard focus to the settings filter field.
    FocusFilter,
}

//! Input mapping.
//!
//! Responsibilities:
//! - Name terminal keys for the hotkey dispatcher (`key_name`).
//! - Map application control chords to actions.
//!
//! Does NOT handle:
//! - Hotkey matching or rebinding (see `hotkeys`).
//!
//! Invariants:
//! - Hotkeys are single unmodified keys, so every application control uses
//!   the Control modifier and never collides with a binding.
//! - `Ctrl+C` is reserved: it always quits and can never be rebound.

pub mod key_name;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;

pub use key_name::key_name;

/// Returns true for the reserved quit chord.
pub fn is_quit_chord(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Maps an application control chord to its action.
///
/// `settings_open` selects between the main screen and settings panel chords.
pub fn control_chord(key: KeyEvent, settings_open: bool) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };

    match (c.to_ascii_lowercase(), settings_open) {
        ('c', _) => Some(Action::Quit),
        ('s', false) => Some(Action::OpenSettings),
        ('s', true) => Some(Action::CloseSettings),
        ('n', true) => Some(Action::SelectNext),
        ('p', true) => Some(Action::SelectPrevious),
        ('e', true) => Some(Action::RecordSelected),
        ('r', true) => Some(Action::OpenResetConfirm),
        ('f', true) => Some(Action::FocusFilter),
        _ => None,
    }
}

/// One-line key hints for the footer.
pub fn footer_hints(settings_open: bool) -> &'static str {
    if settings_open {
        "^S:Close  ^N/^P or ↑/↓:Select  ^E or Enter:Record key  ^F:Filter  ^R:Reset  ^C:Quit"
    } else {
        "^S:Settings  ^C:Quit  Hold any bound key to trigger its action"
    }
}

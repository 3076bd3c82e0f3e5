//! Terminal key codes to key identifiers.
//!
//! Responsibilities:
//! - Name crossterm key codes using the W3C `KeyboardEvent.key`
//!   vocabulary, lowercased.
//!
//! Does NOT handle:
//! - Modifier state: a key's name ignores held modifiers.
//! - Per-platform normalization beyond what crossterm already reports.
//!
//! Invariants:
//! - Returned names are normalized (lowercase, no surrounding whitespace).
//! - The space bar is named `space`.

use crossterm::event::{KeyCode, ModifierKeyCode};

/// Returns the identifier for `code`, or `None` for keys with no name.
pub fn key_name(code: KeyCode) -> Option<String> {
    let named = match code {
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => return Some(c.to_lowercase().collect()),
        KeyCode::F(n) => return Some(format!("f{n}")),
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "arrowleft",
        KeyCode::Right => "arrowright",
        KeyCode::Up => "arrowup",
        KeyCode::Down => "arrowdown",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab | KeyCode::BackTab => "tab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Esc => "escape",
        KeyCode::CapsLock => "capslock",
        KeyCode::ScrollLock => "scrolllock",
        KeyCode::NumLock => "numlock",
        KeyCode::PrintScreen => "printscreen",
        KeyCode::Pause => "pause",
        KeyCode::Menu => "contextmenu",
        KeyCode::Modifier(modifier) => modifier_name(modifier)?,
        KeyCode::Null | KeyCode::KeypadBegin | KeyCode::Media(_) => return None,
    };
    Some(named.to_string())
}

fn modifier_name(modifier: ModifierKeyCode) -> Option<&'static str> {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some("shift"),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some("control"),
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some("alt"),
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta
        | ModifierKeyCode::LeftHyper
        | ModifierKeyCode::RightHyper => Some("meta"),
        ModifierKeyCode::IsoLevel3Shift => Some("altgraph"),
        ModifierKeyCode::IsoLevel5Shift => None,
    }
}

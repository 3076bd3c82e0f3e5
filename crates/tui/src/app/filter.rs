//! Settings filter field.
//!
//! A single-line text input built on `tui-input`. While it has focus the
//! hotkey dispatcher treats key presses as text entry and ignores them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line filter input.
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    input: Input,
}

impl FilterInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => {
                    self.input.handle(InputRequest::GoToPrevWord);
                }
                KeyCode::Right => {
                    self.input.handle(InputRequest::GoToNextWord);
                }
                // Ctrl+U: clear the line
                KeyCode::Char('u') => {
                    self.input.handle(InputRequest::DeleteLine);
                }
                _ => {}
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position (character index).
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Case-insensitive substring match against the current filter.
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.value().to_lowercase())
    }
}

//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `filter`: Settings filter text field
//! - `release`: Key release detection for terminals without release events
//! - `input`: Key routing (reserved chords, dispatcher, default handling)
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod filter;
pub mod release;

mod actions;
mod input;
mod render;

pub use filter::FilterInput;
pub use release::{ReleaseMode, ReleaseTimer};

use hotkey_config::Binding;
use ratatui::widgets::ListState;

use crate::hotkeys::{InputContext, InputDispatcher};
use crate::ui::Toast;
use crate::ui::theme::Theme;

/// Header height in rows.
pub const HEADER_HEIGHT: u16 = 3;
/// Footer height in rows.
pub const FOOTER_HEIGHT: u16 = 3;

/// Main application state.
pub struct App {
    pub dispatcher: InputDispatcher,
    pub settings_open: bool,
    /// Cursor into the filtered settings rows.
    pub settings_state: ListState,
    pub filter: FilterInput,
    pub filter_focused: bool,
    /// Reset confirmation popup is showing.
    pub confirm_reset: bool,
    pub toasts: Vec<Toast>,
    pub theme: Theme,
    pub release: ReleaseTimer,
    pub should_quit: bool,
}

impl App {
    pub fn new(dispatcher: InputDispatcher, release: ReleaseTimer) -> Self {
        Self {
            dispatcher,
            settings_open: false,
            settings_state: ListState::default(),
            filter: FilterInput::new(),
            filter_focused: false,
            confirm_reset: false,
            toasts: Vec::new(),
            theme: Theme::default(),
            release,
            should_quit: false,
        }
    }

    /// Default actions matching the filter, each with its current key.
    ///
    /// Actions whose key is missing from the active set show an empty key.
    pub fn settings_rows(&self) -> Vec<Binding> {
        let store = self.dispatcher.store();
        store
            .defaults()
            .actions()
            .filter(|action| self.filter.matches(action))
            .map(|action| Binding::new(action, store.get(action).unwrap_or_default()))
            .collect()
    }

    /// Action under the settings cursor.
    pub fn selected_action(&self) -> Option<String> {
        let rows = self.settings_rows();
        self.settings_state
            .selected()
            .and_then(|i| rows.get(i))
            .map(|binding| binding.action.clone())
    }

    /// Context for the next key-down.
    pub fn input_context(&self) -> InputContext {
        if self.settings_open && self.filter_focused {
            InputContext::TextEntry
        } else {
            InputContext::Navigation
        }
    }

    /// Keeps the settings cursor on a visible row.
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.settings_rows().len();
        if len == 0 {
            self.settings_state.select(None);
            return;
        }
        let current = self.settings_state.selected().unwrap_or(0);
        self.settings_state.select(Some(current.min(len - 1)));
    }
}

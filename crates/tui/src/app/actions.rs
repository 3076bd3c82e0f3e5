//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Turn rebind and reset outcomes into toasts
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT draw

use std::time::Instant;

use crate::action::Action;
use crate::app::App;
use crate::hotkeys::RebindRequest;
use crate::ui::Toast;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Tick => self.on_tick(Instant::now()),
            Action::Resize(..) => {}
            Action::Quit => self.should_quit = true,
            Action::OpenSettings => {
                self.settings_open = true;
                self.clamp_selection();
            }
            Action::CloseSettings => {
                self.settings_open = false;
                self.filter_focused = false;
                self.confirm_reset = false;
            }
            Action::SelectNext => self.move_selection(1),
            Action::SelectPrevious => self.move_selection(-1),
            Action::RecordSelected => {
                if let Some(action) = self.selected_action() {
                    self.update(Action::RecordKey(action));
                }
            }
            Action::RecordKey(action) => self.record_key(&action),
            Action::OpenResetConfirm => self.confirm_reset = true,
            Action::ResetToDefaults => self.reset_to_defaults(),
            Action::DismissPopup => self.confirm_reset = false,
            Action::FocusFilter => {
                if self.settings_open {
                    self.filter_focused = true;
                }
            }
        }
    }

    /// Expire toasts and synthesize overdue key releases.
    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired());
        for key in self.release.expired(now) {
            tracing::trace!(key = %key, "Synthesized key release");
            self.dispatcher.on_key_up(&key);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.settings_rows().len();
        if len == 0 {
            self.settings_state.select(None);
            return;
        }
        let current = self.settings_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len as isize) as usize;
        self.settings_state.select(Some(next));
    }

    fn record_key(&mut self, action: &str) {
        // The next key must reach the dispatcher, not the filter.
        self.filter_focused = false;

        match self.dispatcher.request_rebind(action) {
            RebindRequest::Armed => {
                tracing::debug!(action = %action, "Awaiting new key");
            }
            RebindRequest::AlreadyArmed { pending } => {
                self.toasts.push(Toast::info(format!(
                    "Already recording a key for \"{pending}\""
                )));
            }
            RebindRequest::UnknownAction => {
                tracing::warn!(action = %action, "Rebind requested for unknown action");
                self.toasts
                    .push(Toast::error(format!("Unknown action \"{action}\"")));
            }
        }
    }

    fn reset_to_defaults(&mut self) {
        self.confirm_reset = false;
        match self.dispatcher.reset_to_defaults() {
            Ok(()) => {
                tracing::info!("Bindings reset to defaults");
                self.toasts.push(Toast::success("Bindings reset to defaults"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist reset bindings");
                self.toasts.push(Toast::warning(format!(
                    "Defaults restored but could not be saved: {e}"
                )));
            }
        }
        self.clamp_selection();
    }
}

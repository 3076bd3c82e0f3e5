//! Key routing for the TUI app.
//!
//! Responsibilities:
//! - Forward key releases to the dispatcher.
//! - Handle the reserved quit chord and the reset confirmation popup.
//! - Map control chords to application actions.
//! - Route every other key through the hotkey dispatcher, then apply default
//!   handling (list navigation, filter editing) unless it was suppressed.
//!
//! Non-responsibilities:
//! - Does NOT decide which keys are bound (see `hotkeys`).
//! - Does NOT perform rebind side effects beyond surfacing their toasts.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use hotkey_config::display_key;

use crate::action::Action;
use crate::app::App;
use crate::hotkeys::KeyDownEffect;
use crate::input::{control_chord, is_quit_chord, key_name};
use crate::ui::Toast;

impl App {
    /// Handle a key event, returning a follow-up action if one is needed.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            if let Some(name) = key_name(key.code) {
                self.release.note_release(&name);
                self.dispatcher.on_key_up(&name);
            }
            return None;
        }

        if is_quit_chord(key) {
            return Some(Action::Quit);
        }

        if self.confirm_reset {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(Action::ResetToDefaults)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::DismissPopup)
                }
                _ => None,
            };
        }

        let armed = self.dispatcher.rebind().is_armed();

        // Auto-repeat of the key that armed the rebind must not become the binding.
        if armed && key.kind == KeyEventKind::Repeat {
            return None;
        }

        if !armed {
            if let Some(action) = control_chord(key, self.settings_open) {
                return Some(action);
            }
        }

        let name = key_name(key.code)?;
        let now = Instant::now();

        // Without release events, repeats of a held key arrive as presses.
        if armed && self.release.is_held(&name, now) {
            self.release.note_press(&name, now);
            return None;
        }

        let outcome = self.dispatcher.on_key_down(&name, self.input_context());

        match outcome.effect {
            KeyDownEffect::Rebound(rebound) => {
                tracing::info!(action = %rebound.action, key = %rebound.key, "Action rebound");
                self.toasts.push(Toast::success(format!(
                    "{} → {}",
                    display_key(&rebound.key),
                    rebound.action
                )));
                if let Some(err) = rebound.persist_error {
                    tracing::warn!(error = %err, "Failed to persist rebound key");
                    self.toasts.push(Toast::warning(format!(
                        "New key is active but could not be saved: {err}"
                    )));
                }
            }
            KeyDownEffect::Tracked => {
                self.release.note_press(&name, now);
            }
            KeyDownEffect::Ignored => {}
        }

        if outcome.suppress_default {
            return None;
        }

        self.default_key_handling(key)
    }

    /// Host handling for keys the dispatcher did not claim.
    fn default_key_handling(&mut self, key: KeyEvent) -> Option<Action> {
        if !self.settings_open {
            return None;
        }

        if self.filter_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.filter_focused = false,
                _ => {
                    self.filter.handle_key(key);
                    self.clamp_selection();
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Up => Some(Action::SelectPrevious),
            KeyCode::Down => Some(Action::SelectNext),
            KeyCode::Enter => Some(Action::RecordSelected),
            KeyCode::Esc => Some(Action::CloseSettings),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ReleaseMode, ReleaseTimer};
    use crate::hotkeys::InputDispatcher;
    use crossterm::event::{KeyEventState, KeyModifiers, ModifierKeyCode};
    use crate::ui::ToastLevel;
    use hotkey_config::{BindingStore, MemorySlotStorage, SlotStorage, StaticDefaults, StorageError};
    use std::path::PathBuf;
    use std::time::Duration;

    fn app_with(storage: impl SlotStorage + Send + 'static, release: ReleaseMode) -> App {
        let mut store = BindingStore::new(storage);
        store
            .load_defaults(&StaticDefaults(
                [("jump", "space"), ("crouch", "c")].into_iter().collect(),
            ))
            .unwrap();
        let _ = store.initialize();
        App::new(InputDispatcher::new(store), ReleaseTimer::new(release))
    }

    fn app() -> App {
        app_with(MemorySlotStorage::new(), ReleaseMode::Native)
    }

    /// Storage that loses every write.
    struct FullDisk;

    impl SlotStorage for FullDisk {
        fn read_slot(&self, _slot: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write_slot(&mut self, slot: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                slot: slot.to_string(),
                path: PathBuf::from("hotkeys.json"),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_and_release_drive_tracker() {
        let mut app = app();
        assert_eq!(app.handle_input(press(KeyCode::Char(' '))), None);
        assert!(app.dispatcher.tracker().is_pressed("space"));

        app.handle_input(release(KeyCode::Char(' ')));
        assert!(!app.dispatcher.tracker().is_pressed("space"));
    }

    #[test]
    fn test_ctrl_c_quits_even_while_armed() {
        let mut app = app();
        app.dispatcher.request_rebind("jump");
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_input(quit), Some(Action::Quit));
        assert_eq!(app.dispatcher.store().get("jump"), Some("space"));
    }

    #[test]
    fn test_bound_enter_is_suppressed_in_settings() {
        let mut app = app();
        app.settings_open = true;
        assert_eq!(
            app.handle_input(press(KeyCode::Enter)),
            Some(Action::RecordSelected)
        );

        app.dispatcher.request_rebind("crouch");
        app.handle_input(press(KeyCode::Enter));
        assert_eq!(app.dispatcher.store().get("crouch"), Some("enter"));

        // Enter is now a hotkey; the host no longer sees it.
        assert_eq!(app.handle_input(press(KeyCode::Enter)), None);
        assert!(app.dispatcher.tracker().is_pressed("enter"));
    }

    #[test]
    fn test_rebind_pushes_toast() {
        let mut app = app();
        app.dispatcher.request_rebind("crouch");
        app.handle_input(press(KeyCode::Char('S')));

        assert_eq!(app.dispatcher.store().get("crouch"), Some("s"));
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "'S' → crouch");
    }

    #[test]
    fn test_repeat_while_armed_is_dropped() {
        let mut app = app();
        app.dispatcher.request_rebind("jump");
        let repeat = KeyEvent {
            kind: KeyEventKind::Repeat,
            ..press(KeyCode::Enter)
        };
        assert_eq!(app.handle_input(repeat), None);
        assert_eq!(app.dispatcher.rebind().armed_for(), Some("jump"));
    }

    #[test]
    fn test_modifier_key_can_be_bound() {
        let mut app = app();
        app.dispatcher.request_rebind("crouch");

        app.handle_input(press(KeyCode::Modifier(ModifierKeyCode::LeftShift)));
        assert_eq!(app.dispatcher.store().get("crouch"), Some("shift"));

        app.handle_input(press(KeyCode::Modifier(ModifierKeyCode::RightShift)));
        assert!(app.dispatcher.tracker().is_pressed("shift"));
        assert_eq!(app.dispatcher.triggered_actions()[0].action, "crouch");
    }

    #[test]
    fn test_unsaved_rebind_warns() {
        let mut app = app_with(FullDisk, ReleaseMode::Native);
        app.dispatcher.request_rebind("crouch");

        app.handle_input(press(KeyCode::Char('s')));

        assert_eq!(app.dispatcher.store().get("crouch"), Some("s"));
        assert_eq!(app.toasts.len(), 2);
        assert_eq!(app.toasts[0].level, ToastLevel::Success);
        assert_eq!(app.toasts[1].level, ToastLevel::Warning);
        assert!(app.toasts[1].message.contains("could not be saved"));
    }

    #[test]
    fn test_held_record_key_does_not_bind_without_release_events() {
        let mut app = app_with(
            MemorySlotStorage::new(),
            ReleaseMode::Synthesized {
                timeout: Duration::from_secs(10),
            },
        );
        app.settings_open = true;
        app.settings_state.select(Some(1));

        // The first Enter arms the rebind; the terminal then repeats it as plain presses.
        let record = app.handle_input(press(KeyCode::Enter));
        assert_eq!(record, Some(Action::RecordSelected));
        app.update(Action::RecordSelected);
        assert_eq!(app.dispatcher.rebind().armed_for(), Some("crouch"));

        assert_eq!(app.handle_input(press(KeyCode::Enter)), None);
        assert_eq!(app.handle_input(press(KeyCode::Enter)), None);
        assert_eq!(app.dispatcher.rebind().armed_for(), Some("crouch"));
        assert_eq!(app.dispatcher.store().get("crouch"), Some("c"));

        app.handle_input(press(KeyCode::Char('x')));
        assert_eq!(app.dispatcher.store().get("crouch"), Some("x"));
    }

    #[test]
    fn test_filter_swallows_bound_keys() {
        let mut app = app();
        app.settings_open = true;
        app.filter_focused = true;

        app.handle_input(press(KeyCode::Char('c')));

        assert_eq!(app.filter.value(), "c");
        assert!(!app.dispatcher.tracker().is_pressed("c"));

        app.handle_input(press(KeyCode::Esc));
        assert!(!app.filter_focused);
    }

    #[test]
    fn test_confirm_popup_is_modal() {
        let mut app = app();
        app.settings_open = true;
        app.confirm_reset = true;

        assert_eq!(app.handle_input(press(KeyCode::Char('c'))), None);
        assert!(!app.dispatcher.tracker().is_pressed("c"));
        assert_eq!(
            app.handle_input(press(KeyCode::Char('y'))),
            Some(Action::ResetToDefaults)
        );
        assert_eq!(
            app.handle_input(press(KeyCode::Esc)),
            Some(Action::DismissPopup)
        );
    }
}

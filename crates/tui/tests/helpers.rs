//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the TUI application.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use hotkey_config::{BindingStore, MemorySlotStorage, StaticDefaults};
use hotkey_tui::app::{App, ReleaseMode, ReleaseTimer};
use hotkey_tui::hotkeys::InputDispatcher;
use ratatui::{Terminal, backend::TestBackend};

/// Default bindings used across tests, in declaration order.
pub const DEFAULTS: [(&str, &str); 3] = [("jump", "space"), ("crouch", "c"), ("reload", "r")];

/// Create a character key press.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a press of any key code.
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a release of any key code.
pub fn release(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    }
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    press(KeyCode::Enter)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    press(KeyCode::Esc)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    press(KeyCode::Down)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    press(KeyCode::Up)
}

/// Build a dispatcher over in-memory storage seeded from `DEFAULTS`.
pub fn dispatcher() -> InputDispatcher {
    let mut store = BindingStore::new(MemorySlotStorage::new());
    store
        .load_defaults(&StaticDefaults(DEFAULTS.into_iter().collect()))
        .expect("static defaults load");
    store.initialize().expect("memory storage initializes");
    InputDispatcher::new(store)
}

/// Build an app that relies on real release events.
pub fn app() -> App {
    App::new(dispatcher(), ReleaseTimer::new(ReleaseMode::Native))
}

/// Renders an `App` into an in-memory terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self {
            app: app(),
            terminal,
        }
    }

    /// Feed a key through the app as the main loop would.
    pub fn input(&mut self, key: KeyEvent) {
        self.app.update(hotkey_tui::Action::Input(key));
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

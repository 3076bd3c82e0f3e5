//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Startup: loading defaults and stored bindings into a dispatcher
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `hotkey_tui::app` and `hotkey_tui::ui`).
//! - Binding semantics (see `hotkey_config::BindingStore` and `hotkey_tui::hotkeys`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod startup;
pub mod terminal;

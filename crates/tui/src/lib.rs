//! Hotkey TUI Library
//!
//! This library provides the hotkey engine (key-state tracking, rebinding,
//! input dispatch), application state, and UI components for the hotkey
//! terminal user interface.
//!
//! # Example
//!
//! ```rust
//! use hotkey_config::{BindingStore, MemorySlotStorage, StaticDefaults};
//! use hotkey_tui::hotkeys::{InputContext, InputDispatcher};
//!
//! let mut store = BindingStore::new(MemorySlotStorage::new());
//! store
//!     .load_defaults(&StaticDefaults([("jump", "space")].into_iter().collect()))
//!     .unwrap();
//! store.initialize().unwrap();
//!
//! let mut dispatcher = InputDispatcher::new(store);
//! let outcome = dispatcher.on_key_down("space", InputContext::Navigation);
//! assert!(outcome.suppress_default);
//! assert_eq!(dispatcher.triggered_actions()[0].action, "jump");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod hotkeys;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::toast::{Toast, ToastLevel};

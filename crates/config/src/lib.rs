//! Binding configuration for Hotkey TUI.
//!
//! This crate provides the types, defaults loading, durable storage and the
//! binding store that together own which key triggers which action.

pub mod constants;
pub mod defaults;
mod env;
pub mod error;
pub mod key;
pub mod storage;
pub mod store;
pub mod types;

pub use defaults::{DefaultsSource, FileDefaults, StaticDefaults};
pub use env::{DotenvError, load_dotenv};
pub use error::{ConfigLoadError, StorageError, StorageParseError};
pub use key::{display_key, normalize_key};
pub use storage::{FileSlotStorage, MemorySlotStorage, SlotStorage, default_storage_dir};
pub use store::{BindingStore, InitOutcome};
pub use types::{Binding, BindingSet};

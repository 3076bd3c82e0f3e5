//! UI rendering modules for the TUI.
//!
//! This module contains screen-specific rendering logic that is separated
//! from the main app state management. Every renderer reads state; none
//! mutates bindings.

pub mod popup;
pub mod screens;
pub mod theme;
pub mod toast;

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};

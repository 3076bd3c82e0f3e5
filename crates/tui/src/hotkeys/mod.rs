//! Hotkey runtime: pressed-key tracking, rebinding and input routing.
//!
//! The binding store lives in `hotkey_config`; everything here is owned by a
//! single `InputDispatcher` created at startup and driven from the UI loop.

pub mod dispatcher;
pub mod rebind;
pub mod tracker;

pub use dispatcher::{InputContext, InputDispatcher, KeyDown, KeyDownEffect};
pub use rebind::{RebindController, RebindRequest, RebindState, Rebound};
pub use tracker::KeyStateTracker;

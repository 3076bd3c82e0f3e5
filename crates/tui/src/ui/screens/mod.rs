//! Screen-specific rendering.

pub mod settings;
pub mod triggered;

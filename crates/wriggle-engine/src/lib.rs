//! Wriggle engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the gesture
//! layer and the studio binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

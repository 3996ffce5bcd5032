//! Application state management module.
//!
//! This module contains the state of the terminal host, including:
//! - Main `State` struct holding the sample controller and UI settings
//! - Mouse-wheel gesture tracking for the digit strips
//! - The shared log buffer shown in the log panel

mod gesture;
mod state_impl;

pub use gesture::WheelGestures;
pub use state_impl::{push_log, LogBuffer, State, LOG_CAPACITY};

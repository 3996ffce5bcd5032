//! Event handling module.
//!
//! Terminal events (keys, mouse wheel, ticks) are polled on a separate thread
//! and handled on the main thread, which owns the picker.

pub mod terminal;

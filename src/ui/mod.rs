//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout
//! - Theme management
//! - The digit wheel widget and styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub use render::{render, wheel_areas};
pub use theme::{ColorSpec, Theme};

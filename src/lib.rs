//! A themed number picker made of three independently scrollable digit
//! wheels, and a terminal sample host that shows the selected value.
//!
//! The picker model in [`picker`] is independent of any UI toolkit: a host
//! forwards scroll gestures to a [`picker::NumberPickerView`] and receives
//! value changes through [`picker::NumberPickerDelegate`]. The remaining
//! modules run the sample host in a terminal with `ratatui`.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod picker;
pub mod sample;
pub mod state;
pub mod ui;

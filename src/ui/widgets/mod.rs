//! Reusable UI widget components.
//!
//! This module contains the digit wheel widget and styling utilities.

pub mod digit_wheel;
pub mod styling;

pub use digit_wheel::DigitWheel;

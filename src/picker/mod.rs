//! Number picker control.
//!
//! This module contains the headless model of the picker:
//! - `DigitStrip`: one circular strip of the digits 0-9 with its scroll state
//! - `NumberPickerView`: three strips combined into a value in `[0, 999]`
//! - `NumberPickerDelegate`: the value-changed notification interface
//! - Picker construction error handling

mod delegate;
mod error;
mod slot;
mod strip;
mod view;

pub use delegate::NumberPickerDelegate;
pub use error::PickerError;
pub use slot::StripSlot;
pub use strip::{DigitStrip, ScrollPhase, Settle, DEFAULT_ITEM_HEIGHT, DIGIT_COUNT};
pub use view::{DigitChange, NumberPickerBuilder, NumberPickerView, MAX_VALUE};

//! Picker construction error types.

/// Errors raised when a picker or strip is built from invalid input.
///
/// Gesture operations never fail; only construction validates its input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    /// Strip item height must be a positive, finite number
    #[error("Invalid item height {0}: must be positive and finite")]
    InvalidItemHeight(f64),

    /// A single strip only holds the digits 0-9
    #[error("Digit {0} out of range 0-9")]
    DigitOutOfRange(u8),

    /// Three strips can represent at most 999
    #[error("Value {0} out of range 0-999")]
    ValueOutOfRange(u16),
}

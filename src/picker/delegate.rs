use super::view::NumberPickerView;

/// Receives value-change notifications from a [`NumberPickerView`].
///
/// The picker only keeps a weak reference to its delegate. Whoever owns the
/// delegate decides how long it lives; once it is dropped the picker stops
/// notifying it.
///
pub trait NumberPickerDelegate {
    /// Called once for every strip settle that changes the picker's value.
    fn number_picker_did_change_value(&self, picker: &NumberPickerView);
}

use super::delegate::NumberPickerDelegate;
use super::error::PickerError;
use super::slot::StripSlot;
use super::strip::{DigitStrip, Settle, DEFAULT_ITEM_HEIGHT};
use log::*;
use std::rc::{Rc, Weak};

/// Largest value three strips can show.
pub const MAX_VALUE: u16 = 999;

/// A settle that changed the digit of one strip.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitChange {
    pub slot: StripSlot,
    pub previous: u8,
    pub current: u8,
}

/// Three independently scrollable digit strips combined into one value.
///
/// The host forwards gestures per slot (`begin_scroll`, `scroll_by`,
/// `end_scroll`) and drives snapping with `advance` or `settle_now`. Every
/// completed snap that lands on a new digit notifies the delegate once, from
/// inside the call that completed it.
///
pub struct NumberPickerView {
    strips: [DigitStrip; 3],
    delegate: Option<Weak<dyn NumberPickerDelegate>>,
}

impl Default for NumberPickerView {
    fn default() -> Self {
        NumberPickerView::new()
    }
}

impl std::fmt::Debug for NumberPickerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberPickerView")
            .field("strips", &self.strips)
            .field("has_delegate", &self.has_delegate())
            .finish()
    }
}

impl NumberPickerView {
    /// Return a picker showing 000 with no delegate.
    ///
    pub fn new() -> NumberPickerView {
        NumberPickerView::with_strips(
            DigitStrip::default(),
            DigitStrip::default(),
            DigitStrip::default(),
        )
    }

    /// Return a picker wired to the given strips.
    ///
    pub fn with_strips(
        hundreds: DigitStrip,
        tens: DigitStrip,
        units: DigitStrip,
    ) -> NumberPickerView {
        NumberPickerView {
            strips: [hundreds, tens, units],
            delegate: None,
        }
    }

    pub fn builder() -> NumberPickerBuilder {
        NumberPickerBuilder::default()
    }

    /// Combined value of the settled digits, in `[0, 999]`.
    ///
    /// While a strip is moving this still reports its last settled digit.
    ///
    pub fn value(&self) -> u16 {
        StripSlot::ALL
            .iter()
            .map(|slot| u16::from(self.strip(*slot).settled_digit()) * slot.place_value())
            .sum()
    }

    /// Settled digits, most significant first.
    ///
    pub fn digits(&self) -> [u8; 3] {
        [
            self.strips[0].settled_digit(),
            self.strips[1].settled_digit(),
            self.strips[2].settled_digit(),
        ]
    }

    pub fn strip(&self, slot: StripSlot) -> &DigitStrip {
        &self.strips[slot.index()]
    }

    /// Whether any strip is scrolling or snapping.
    ///
    pub fn is_scrolling(&self) -> bool {
        self.strips.iter().any(|strip| !strip.is_idle())
    }

    /// Register a delegate without taking ownership of it.
    ///
    pub fn set_delegate<D: NumberPickerDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.set_delegate_weak(weak);
    }

    pub fn set_delegate_weak(&mut self, delegate: Weak<dyn NumberPickerDelegate>) {
        debug!("Number picker delegate set");
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Whether a delegate is registered and still alive.
    ///
    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .map(|delegate| delegate.strong_count() > 0)
            .unwrap_or(false)
    }

    pub fn begin_scroll(&mut self, slot: StripSlot) {
        trace!("Scroll began on {} strip", slot);
        self.strips[slot.index()].begin_scroll();
    }

    pub fn scroll_by(&mut self, slot: StripSlot, delta: f64) {
        self.strips[slot.index()].scroll_by(delta);
    }

    pub fn end_scroll(&mut self, slot: StripSlot) {
        trace!("Scroll ended on {} strip", slot);
        self.strips[slot.index()].end_scroll();
    }

    /// Scroll one strip by whole digits and release it. The snap still has
    /// to be completed with `advance` or `settle_now`.
    ///
    pub fn step(&mut self, slot: StripSlot, steps: i32) {
        let strip = &mut self.strips[slot.index()];
        let delta = f64::from(steps) * strip.item_height();
        strip.begin_scroll();
        strip.scroll_by(delta);
        strip.end_scroll();
    }

    /// Advance every snapping strip by at most `max_step` content units,
    /// in slot order. Returns the settles that changed a digit; each one has
    /// already been reported to the delegate.
    ///
    pub fn advance(&mut self, max_step: f64) -> Vec<DigitChange> {
        let mut changes = Vec::new();
        for slot in StripSlot::ALL {
            if let Some(settle) = self.strips[slot.index()].advance(max_step) {
                changes.extend(self.complete_settle(slot, settle));
            }
        }
        changes
    }

    /// Complete the pending snap of one strip at once.
    ///
    pub fn settle_now(&mut self, slot: StripSlot) -> Option<DigitChange> {
        let settle = self.strips[slot.index()].settle_now()?;
        self.complete_settle(slot, settle)
    }

    fn complete_settle(&mut self, slot: StripSlot, settle: Settle) -> Option<DigitChange> {
        if !settle.changed() {
            trace!("{} strip settled back on {}", slot, settle.current);
            return None;
        }
        debug!(
            "{} strip settled {} -> {}, value now {}",
            slot,
            settle.previous,
            settle.current,
            self.value()
        );
        self.notify_delegate();
        Some(DigitChange {
            slot,
            previous: settle.previous,
            current: settle.current,
        })
    }

    fn notify_delegate(&self) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => delegate.number_picker_did_change_value(self),
            None => trace!("No live delegate to notify"),
        }
    }
}

/// Explicit wiring for a [`NumberPickerView`].
///
#[derive(Debug, Default)]
pub struct NumberPickerBuilder {
    item_height: Option<f64>,
    value: Option<u16>,
    strips: Option<[DigitStrip; 3]>,
}

impl NumberPickerBuilder {
    /// Height of one digit on every strip, in content units.
    ///
    pub fn item_height(mut self, item_height: f64) -> Self {
        self.item_height = Some(item_height);
        self
    }

    /// Value the strips start settled on.
    ///
    pub fn value(mut self, value: u16) -> Self {
        self.value = Some(value);
        self
    }

    /// Use pre-built strips; overrides `item_height` and `value`.
    ///
    pub fn strips(mut self, hundreds: DigitStrip, tens: DigitStrip, units: DigitStrip) -> Self {
        self.strips = Some([hundreds, tens, units]);
        self
    }

    pub fn build(self) -> Result<NumberPickerView, PickerError> {
        if let Some([hundreds, tens, units]) = self.strips {
            return Ok(NumberPickerView::with_strips(hundreds, tens, units));
        }
        let item_height = self.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT);
        let value = self.value.unwrap_or(0);
        if value > MAX_VALUE {
            return Err(PickerError::ValueOutOfRange(value));
        }
        let digit = |slot: StripSlot| ((value / slot.place_value()) % 10) as u8;
        Ok(NumberPickerView::with_strips(
            DigitStrip::with_digit(item_height, digit(StripSlot::Hundreds))?,
            DigitStrip::with_digit(item_height, digit(StripSlot::Tens))?,
            DigitStrip::with_digit(item_height, digit(StripSlot::Units))?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recorder {
        calls: Cell<usize>,
        values: RefCell<Vec<u16>>,
    }

    impl NumberPickerDelegate for Recorder {
        fn number_picker_did_change_value(&self, picker: &NumberPickerView) {
            self.calls.set(self.calls.get() + 1);
            self.values.borrow_mut().push(picker.value());
        }
    }

    fn picker_with_recorder(value: u16) -> (NumberPickerView, Rc<Recorder>) {
        let mut picker = NumberPickerView::builder().value(value).build().unwrap();
        let recorder = Rc::new(Recorder::default());
        picker.set_delegate(&recorder);
        (picker, recorder)
    }

    #[test]
    fn test_new_picker_is_zero_without_delegate() {
        let picker = NumberPickerView::new();
        assert_eq!(picker.value(), 0);
        assert_eq!(picker.digits(), [0, 0, 0]);
        assert!(!picker.has_delegate());
        assert!(!picker.is_scrolling());
    }

    #[test]
    fn test_value_for_all_digit_triples() {
        for a in 0..10u8 {
            for b in 0..10u8 {
                for c in 0..10u8 {
                    let picker = NumberPickerView::with_strips(
                        DigitStrip::with_digit(1.0, a).unwrap(),
                        DigitStrip::with_digit(1.0, b).unwrap(),
                        DigitStrip::with_digit(1.0, c).unwrap(),
                    );
                    let expected = 100 * u16::from(a) + 10 * u16::from(b) + u16::from(c);
                    assert_eq!(picker.value(), expected);
                }
            }
        }
    }

    #[test]
    fn test_builder_value() {
        let picker = NumberPickerView::builder().value(123).build().unwrap();
        assert_eq!(picker.value(), 123);
        assert_eq!(picker.digits(), [1, 2, 3]);
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        assert_eq!(
            NumberPickerView::builder().value(1000).build().unwrap_err(),
            PickerError::ValueOutOfRange(1000)
        );
        assert_eq!(
            NumberPickerView::builder().item_height(-2.0).build().unwrap_err(),
            PickerError::InvalidItemHeight(-2.0)
        );
    }

    #[test]
    fn test_builder_strips_override() {
        let picker = NumberPickerView::builder()
            .value(999)
            .strips(
                DigitStrip::with_digit(2.0, 4).unwrap(),
                DigitStrip::with_digit(2.0, 0).unwrap(),
                DigitStrip::with_digit(2.0, 7).unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(picker.value(), 407);
        assert_eq!(picker.strip(StripSlot::Units).item_height(), 2.0);
    }

    #[test]
    fn test_single_settle_notifies_once() {
        let (mut picker, recorder) = picker_with_recorder(123);
        picker.step(StripSlot::Hundreds, 1);
        assert_eq!(recorder.calls.get(), 0);
        let change = picker.settle_now(StripSlot::Hundreds).unwrap();
        assert_eq!(
            change,
            DigitChange {
                slot: StripSlot::Hundreds,
                previous: 1,
                current: 2
            }
        );
        assert_eq!(recorder.calls.get(), 1);
        assert_eq!(*recorder.values.borrow(), vec![223]);
        assert_eq!(picker.value(), 223);
    }

    #[test]
    fn test_value_is_settled_snapshot_while_scrolling() {
        let (mut picker, recorder) = picker_with_recorder(5);
        picker.begin_scroll(StripSlot::Units);
        picker.scroll_by(StripSlot::Units, 2.2);
        assert!(picker.is_scrolling());
        assert_eq!(picker.strip(StripSlot::Units).digit(), 7);
        assert_eq!(picker.value(), 5);
        assert_eq!(recorder.calls.get(), 0);
    }

    #[test]
    fn test_rapid_wrapping_settles_notify_each() {
        let (mut picker, recorder) = picker_with_recorder(9);
        picker.step(StripSlot::Units, 1);
        picker.settle_now(StripSlot::Units);
        picker.step(StripSlot::Units, 1);
        picker.settle_now(StripSlot::Units);
        picker.step(StripSlot::Units, -1);
        picker.settle_now(StripSlot::Units);
        assert_eq!(recorder.calls.get(), 3);
        assert_eq!(*recorder.values.borrow(), vec![0, 1, 0]);
    }

    #[test]
    fn test_settle_to_same_digit_is_silent() {
        let (mut picker, recorder) = picker_with_recorder(40);
        picker.scroll_by(StripSlot::Tens, 0.3);
        picker.end_scroll(StripSlot::Tens);
        assert_eq!(picker.settle_now(StripSlot::Tens), None);
        assert_eq!(recorder.calls.get(), 0);
        assert!(!picker.is_scrolling());
    }

    #[test]
    fn test_interrupted_settle_is_silent() {
        let (mut picker, recorder) = picker_with_recorder(0);
        picker.scroll_by(StripSlot::Tens, 1.4);
        picker.end_scroll(StripSlot::Tens);
        picker.begin_scroll(StripSlot::Tens);
        assert!(picker.advance(5.0).is_empty());
        assert_eq!(recorder.calls.get(), 0);
        picker.end_scroll(StripSlot::Tens);
        assert_eq!(picker.advance(5.0).len(), 1);
        assert_eq!(recorder.calls.get(), 1);
        assert_eq!(picker.value(), 10);
    }

    #[test]
    fn test_each_strip_settle_notifies_in_slot_order() {
        let (mut picker, recorder) = picker_with_recorder(0);
        picker.step(StripSlot::Units, 3);
        picker.step(StripSlot::Hundreds, 1);
        picker.step(StripSlot::Tens, 2);
        let changes = picker.advance(100.0);
        let slots: Vec<StripSlot> = changes.iter().map(|c| c.slot).collect();
        assert_eq!(slots, StripSlot::ALL.to_vec());
        assert_eq!(recorder.calls.get(), 3);
        assert_eq!(*recorder.values.borrow(), vec![100, 120, 123]);
    }

    #[test]
    fn test_advance_animates_over_several_calls() {
        let (mut picker, recorder) = picker_with_recorder(0);
        picker.scroll_by(StripSlot::Units, 0.8);
        picker.end_scroll(StripSlot::Units);
        assert!(picker.advance(0.1).is_empty());
        assert_eq!(recorder.calls.get(), 0);
        assert_eq!(picker.advance(0.1).len(), 1);
        assert_eq!(recorder.calls.get(), 1);
        assert_eq!(picker.value(), 1);
    }

    #[test]
    fn test_dropped_delegate_is_skipped() {
        let (mut picker, recorder) = picker_with_recorder(0);
        drop(recorder);
        assert!(!picker.has_delegate());
        picker.step(StripSlot::Units, 1);
        assert!(picker.settle_now(StripSlot::Units).is_some());
        assert_eq!(picker.value(), 1);
    }

    #[test]
    fn test_clear_delegate() {
        let (mut picker, recorder) = picker_with_recorder(0);
        picker.clear_delegate();
        picker.step(StripSlot::Tens, 1);
        picker.settle_now(StripSlot::Tens);
        assert_eq!(recorder.calls.get(), 0);
    }

    #[test]
    fn test_dropping_picker_mid_scroll_never_notifies() {
        let (mut picker, recorder) = picker_with_recorder(0);
        picker.scroll_by(StripSlot::Hundreds, 3.0);
        picker.step(StripSlot::Units, 4);
        drop(picker);
        assert_eq!(recorder.calls.get(), 0);
        assert_eq!(Rc::strong_count(&recorder), 1);
    }
}

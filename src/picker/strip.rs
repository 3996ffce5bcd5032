//! A single circular digit strip.
//!
//! The strip models a scrollable column of the digits 0-9 repeating forever.
//! Its offset is measured in content units and kept within one cycle
//! (`10 * item_height`), so scrolling past 9 continues at 0 and the other way
//! round. The digit under the offset is `round(offset / item_height) mod 10`.

use super::error::PickerError;
use log::*;

/// Number of digits on one strip.
pub const DIGIT_COUNT: u8 = 10;

/// Item height used when none is given.
pub const DEFAULT_ITEM_HEIGHT: f64 = 1.0;

/// Scroll state of a strip.
///
/// A strip moves `Idle -> Scrolling -> Settling -> Idle`. A new scroll while
/// settling returns it to `Scrolling` and drops the pending snap.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollPhase {
    Idle,
    Scrolling,
    Settling { target: f64 },
}

/// Outcome of a completed snap.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    pub previous: u8,
    pub current: u8,
}

impl Settle {
    /// Whether the snap landed on a different digit than the last one.
    ///
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Clone)]
pub struct DigitStrip {
    offset: f64,
    item_height: f64,
    phase: ScrollPhase,
    settled_digit: u8,
}

impl Default for DigitStrip {
    fn default() -> Self {
        DigitStrip {
            offset: 0.0,
            item_height: DEFAULT_ITEM_HEIGHT,
            phase: ScrollPhase::Idle,
            settled_digit: 0,
        }
    }
}

impl DigitStrip {
    /// Return a strip resting on digit 0.
    ///
    pub fn new(item_height: f64) -> Result<DigitStrip, PickerError> {
        DigitStrip::with_digit(item_height, 0)
    }

    /// Return a strip resting on the given digit.
    ///
    pub fn with_digit(item_height: f64, digit: u8) -> Result<DigitStrip, PickerError> {
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(PickerError::InvalidItemHeight(item_height));
        }
        if digit >= DIGIT_COUNT {
            return Err(PickerError::DigitOutOfRange(digit));
        }
        Ok(DigitStrip {
            offset: f64::from(digit) * item_height,
            item_height,
            phase: ScrollPhase::Idle,
            settled_digit: digit,
        })
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ScrollPhase::Idle
    }

    /// Digit the strip last settled on.
    ///
    pub fn settled_digit(&self) -> u8 {
        self.settled_digit
    }

    /// Digit currently under the offset. Differs from the settled digit while
    /// the strip is in motion.
    ///
    pub fn digit(&self) -> u8 {
        digit_at(self.offset, self.item_height)
    }

    /// Distance of the offset from the boundary of the digit under it, in
    /// items, within `[-0.5, 0.5]`.
    ///
    pub fn fraction(&self) -> f64 {
        let position = self.offset / self.item_height;
        position - position.round()
    }

    fn cycle_length(&self) -> f64 {
        self.item_height * f64::from(DIGIT_COUNT)
    }

    /// Start a scroll gesture, cancelling any snap in progress.
    ///
    pub fn begin_scroll(&mut self) {
        if let ScrollPhase::Settling { target } = self.phase {
            trace!("Snap toward {} interrupted by a new scroll", target);
        }
        self.phase = ScrollPhase::Scrolling;
    }

    /// Move the offset by `delta` content units, wrapping around the cycle.
    /// Begins a gesture if one is not already running.
    ///
    pub fn scroll_by(&mut self, delta: f64) {
        if self.phase != ScrollPhase::Scrolling {
            self.begin_scroll();
        }
        debug_assert!(delta.is_finite(), "scroll delta must be finite");
        if !delta.is_finite() {
            return;
        }
        self.offset = (self.offset + delta).rem_euclid(self.cycle_length());
    }

    /// End the gesture and start snapping to the nearest digit boundary.
    /// Has no effect unless the strip is scrolling.
    ///
    pub fn end_scroll(&mut self) {
        if self.phase != ScrollPhase::Scrolling {
            return;
        }
        let target = (self.offset / self.item_height).round() * self.item_height;
        self.phase = ScrollPhase::Settling { target };
    }

    /// Move a settling strip toward its snap target by at most `max_step`
    /// content units. Returns the settle once the target is reached. A
    /// non-positive or non-finite step completes the snap at once.
    ///
    pub fn advance(&mut self, max_step: f64) -> Option<Settle> {
        let ScrollPhase::Settling { target } = self.phase else {
            return None;
        };
        debug_assert!(!max_step.is_nan(), "snap step must not be NaN");
        let remaining = target - self.offset;
        if !max_step.is_finite() || max_step <= 0.0 || remaining.abs() <= max_step {
            return Some(self.complete_settle(target));
        }
        self.offset += max_step.copysign(remaining);
        None
    }

    /// Complete a pending snap immediately.
    ///
    pub fn settle_now(&mut self) -> Option<Settle> {
        match self.phase {
            ScrollPhase::Settling { target } => Some(self.complete_settle(target)),
            _ => None,
        }
    }

    fn complete_settle(&mut self, target: f64) -> Settle {
        let digit = digit_at(target, self.item_height);
        // The target may sit exactly one cycle up; park on the canonical offset.
        self.offset = f64::from(digit) * self.item_height;
        self.phase = ScrollPhase::Idle;
        let previous = self.settled_digit;
        self.settled_digit = digit;
        Settle {
            previous,
            current: digit,
        }
    }
}

fn digit_at(offset: f64, item_height: f64) -> u8 {
    ((offset / item_height).round() as i64).rem_euclid(i64::from(DIGIT_COUNT)) as u8
}

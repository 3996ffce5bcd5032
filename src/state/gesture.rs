//! Mouse-wheel gesture tracking.
//!
//! A terminal reports wheel notches, not finger lifts. A wheel gesture on a
//! strip is considered over once no notch has arrived for the settle delay.

use crate::picker::StripSlot;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct WheelGestures {
    delay: Duration,
    last_notch: [Option<Instant>; 3],
}

impl WheelGestures {
    pub fn new(delay: Duration) -> Self {
        WheelGestures {
            delay,
            last_notch: [None; 3],
        }
    }

    /// Record a wheel notch on the given strip.
    ///
    pub fn record(&mut self, slot: StripSlot, now: Instant) {
        self.last_notch[slot.index()] = Some(now);
    }

    /// Return the strips whose gesture has gone quiet and forget them.
    ///
    pub fn take_expired(&mut self, now: Instant) -> Vec<StripSlot> {
        let mut expired = Vec::new();
        for slot in StripSlot::ALL {
            let last = &mut self.last_notch[slot.index()];
            if let Some(at) = *last {
                if now.saturating_duration_since(at) >= self.delay {
                    *last = None;
                    expired.push(slot);
                }
            }
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_expires_after_delay() {
        let start = Instant::now();
        let mut gestures = WheelGestures::new(Duration::from_millis(200));
        gestures.record(StripSlot::Tens, start);

        assert!(gestures
            .take_expired(start + Duration::from_millis(100))
            .is_empty());
        assert_eq!(
            gestures.take_expired(start + Duration::from_millis(200)),
            vec![StripSlot::Tens]
        );
        assert!(gestures
            .take_expired(start + Duration::from_secs(1))
            .is_empty());
    }

    #[test]
    fn test_new_notch_extends_gesture() {
        let start = Instant::now();
        let mut gestures = WheelGestures::new(Duration::from_millis(200));
        gestures.record(StripSlot::Units, start);
        gestures.record(StripSlot::Units, start + Duration::from_millis(150));
        assert!(gestures
            .take_expired(start + Duration::from_millis(250))
            .is_empty());
        assert_eq!(
            gestures.take_expired(start + Duration::from_millis(350)),
            vec![StripSlot::Units]
        );
    }

    #[test]
    fn test_expired_in_slot_order() {
        let start = Instant::now();
        let mut gestures = WheelGestures::new(Duration::from_millis(10));
        gestures.record(StripSlot::Units, start);
        gestures.record(StripSlot::Hundreds, start);
        assert_eq!(
            gestures.take_expired(start + Duration::from_millis(10)),
            vec![StripSlot::Hundreds, StripSlot::Units]
        );
    }
}

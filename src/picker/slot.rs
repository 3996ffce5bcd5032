//! Positional slots of the three digit strips.

use std::fmt;

/// Names the three strips of a picker, most significant first.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StripSlot {
    Hundreds,
    Tens,
    Units,
}

impl StripSlot {
    /// All slots in the order settles are processed.
    pub const ALL: [StripSlot; 3] = [StripSlot::Hundreds, StripSlot::Tens, StripSlot::Units];

    /// Position of the slot in the picker, left to right.
    ///
    pub fn index(self) -> usize {
        match self {
            StripSlot::Hundreds => 0,
            StripSlot::Tens => 1,
            StripSlot::Units => 2,
        }
    }

    /// Return the slot at the given position, if any.
    ///
    pub fn from_index(index: usize) -> Option<StripSlot> {
        StripSlot::ALL.get(index).copied()
    }

    /// Decimal weight of the digit held in this slot.
    ///
    pub fn place_value(self) -> u16 {
        match self {
            StripSlot::Hundreds => 100,
            StripSlot::Tens => 10,
            StripSlot::Units => 1,
        }
    }

    /// Slot to the right, wrapping back to hundreds.
    ///
    pub fn next(self) -> StripSlot {
        StripSlot::ALL[(self.index() + 1) % StripSlot::ALL.len()]
    }

    /// Slot to the left, wrapping to units.
    ///
    pub fn prev(self) -> StripSlot {
        let len = StripSlot::ALL.len();
        StripSlot::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for StripSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StripSlot::Hundreds => "hundreds",
            StripSlot::Tens => "tens",
            StripSlot::Units => "units",
        };
        f.write_str(name)
    }
}

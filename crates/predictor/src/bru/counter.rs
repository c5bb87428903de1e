//! Two-bit Saturating Counters.
//!
//! The counter is the shared primitive of every table-based predictor. It provides:
//! 1. **State Machine:** Four ordered states that clamp at both ends.
//! 2. **Counter Tables:** Fixed-size, directly addressed arrays of counters.
//!
//! States are a closed enum, so a counter can never hold a value outside
//! the four-state domain.

use crate::common::Direction;

/// Two-bit saturating counter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum SaturatingCounter {
    /// 0: predict not taken, two taken outcomes away from flipping.
    StronglyNotTaken = 0,
    /// 1: predict not taken, one taken outcome away from flipping.
    #[default]
    WeaklyNotTaken = 1,
    /// 2: predict taken, one not-taken outcome away from flipping.
    WeaklyTaken = 2,
    /// 3: predict taken, two not-taken outcomes away from flipping.
    StronglyTaken = 3,
}

impl SaturatingCounter {
    /// Midpoint value; states at or above it predict taken.
    pub const MIDPOINT: u8 = 2;

    /// Returns the predicted direction.
    #[inline(always)]
    pub fn predict(self) -> Direction {
        Direction::from(self.value() >= Self::MIDPOINT)
    }

    /// Returns the state after observing `outcome`.
    ///
    /// Taken moves one step toward `StronglyTaken`, not taken one step toward
    /// `StronglyNotTaken`; the extremes are absorbing.
    #[inline(always)]
    pub fn next(self, outcome: Direction) -> Self {
        match (self, outcome) {
            (Self::StronglyNotTaken, Direction::Taken) => Self::WeaklyNotTaken,
            (Self::WeaklyNotTaken, Direction::Taken) => Self::WeaklyTaken,
            (Self::WeaklyTaken | Self::StronglyTaken, Direction::Taken) => Self::StronglyTaken,
            (Self::StronglyTaken, Direction::NotTaken) => Self::WeaklyTaken,
            (Self::WeaklyTaken, Direction::NotTaken) => Self::WeaklyNotTaken,
            (Self::WeaklyNotTaken | Self::StronglyNotTaken, Direction::NotTaken) => {
                Self::StronglyNotTaken
            }
        }
    }

    /// Applies `outcome` in place.
    #[inline(always)]
    pub fn update(&mut self, outcome: Direction) {
        *self = self.next(outcome);
    }

    /// Returns the raw two-bit value (0..=3).
    #[inline(always)]
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Directly addressed table of two-bit counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTable {
    /// Counter storage (`2^bits` entries).
    entries: Vec<SaturatingCounter>,
    /// Mask for reducing an address or history to an index.
    mask: usize,
}

impl CounterTable {
    /// Creates a table of `2^bits` counters, all in state `initial`.
    pub fn new(bits: usize, initial: SaturatingCounter) -> Self {
        let size = 1usize << bits;
        Self {
            entries: vec![initial; size],
            mask: size - 1,
        }
    }

    /// Index mask (`len() - 1`).
    #[inline(always)]
    pub fn mask(&self) -> usize {
        self.mask
    }

    /// Number of counters.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a table has at least one entry.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads the predicted direction of entry `index`.
    ///
    /// `index` must already be masked to the table size.
    #[inline(always)]
    pub fn read(&self, index: usize) -> Direction {
        debug_assert!(index <= self.mask, "counter index {index:#x} out of range");
        self.entries[index].predict()
    }

    /// Trains entry `index` with `outcome`.
    ///
    /// `index` must already be masked to the table size.
    #[inline(always)]
    pub fn update(&mut self, index: usize, outcome: Direction) {
        debug_assert!(index <= self.mask, "counter index {index:#x} out of range");
        self.entries[index].update(outcome);
    }

    /// Returns the counter at `index`.
    #[inline(always)]
    pub fn counter(&self, index: usize) -> SaturatingCounter {
        self.entries[index]
    }
}

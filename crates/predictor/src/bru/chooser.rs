//! Chooser (meta-predictor) table.
//!
//! A chooser arbitrates between a primary and an alternate sub-predictor. Each
//! entry is a two-bit saturating counter that starts at the midpoint; values at or
//! above the midpoint select the primary prediction.

use super::counter::{CounterTable, SaturatingCounter};
use crate::common::Direction;

/// Table of two-bit chooser counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChooserTable {
    /// Counters; "taken" means "trust the primary predictor".
    counters: CounterTable,
}

impl ChooserTable {
    /// Creates `2^bits` chooser counters at the midpoint.
    pub fn new(bits: usize) -> Self {
        Self {
            counters: CounterTable::new(bits, SaturatingCounter::WeaklyTaken),
        }
    }

    /// Index mask.
    #[inline(always)]
    pub fn mask(&self) -> usize {
        self.counters.mask()
    }

    /// Returns `true` if entry `index` currently selects the primary predictor.
    #[inline(always)]
    pub fn prefers_primary(&self, index: usize) -> bool {
        self.counters.read(index).is_taken()
    }

    /// Picks between the two sub-predictions using entry `index`.
    #[inline(always)]
    pub fn select(&self, index: usize, primary: Direction, alternate: Direction) -> Direction {
        if self.prefers_primary(index) {
            primary
        } else {
            alternate
        }
    }

    /// Trains entry `index` given both sub-predictions and the resolved outcome.
    ///
    /// Moves toward the primary when only the primary was right, toward the
    /// alternate when only the alternate was right, and is left alone otherwise.
    pub fn update(
        &mut self,
        index: usize,
        primary: Direction,
        alternate: Direction,
        outcome: Direction,
    ) {
        let primary_correct = primary == outcome;
        let alternate_correct = alternate == outcome;
        if primary_correct != alternate_correct {
            self.counters
                .update(index, Direction::from(primary_correct));
        }
    }

    /// Raw counter value (0..=3) of entry `index`.
    #[inline(always)]
    pub fn value(&self, index: usize) -> u8 {
        self.counters.counter(index).value()
    }
}

//! Local (per-address history) predictor.
//!
//! Two-level PAg scheme: the low address bits select a per-branch history
//! pattern, and that pattern selects a two-bit counter in a shared pattern table.
//! Used as the primary component of both the tournament and the hybrid predictor.

use super::{
    counter::{CounterTable, SaturatingCounter},
    history::LocalHistoryTable,
};
use crate::common::Direction;

/// Local history table plus its pattern history table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalPredictor {
    /// Per-branch history patterns.
    history: LocalHistoryTable,
    /// Counters indexed by history pattern.
    pht: CounterTable,
}

impl LocalPredictor {
    /// Creates a local predictor tracking `2^table_bits` branches with
    /// `history_bits` of history each.
    pub fn new(table_bits: usize, history_bits: usize) -> Self {
        Self {
            history: LocalHistoryTable::new(table_bits, history_bits),
            pht: CounterTable::new(history_bits, SaturatingCounter::WeaklyNotTaken),
        }
    }

    /// Pattern table index for the branch at `pc`.
    #[inline(always)]
    pub fn index(&self, pc: u32) -> usize {
        self.history.pattern(pc) & self.pht.mask()
    }

    /// Predicts the branch at `pc` from its own history.
    #[inline(always)]
    pub fn predict(&self, pc: u32) -> Direction {
        self.pht.read(self.index(pc))
    }

    /// Trains the counter selected by the branch's current history.
    #[inline(always)]
    pub fn update_pattern(&mut self, pc: u32, outcome: Direction) {
        let idx = self.index(pc);
        self.pht.update(idx, outcome);
    }

    /// Shifts `outcome` into the branch's history.
    #[inline(always)]
    pub fn push_history(&mut self, pc: u32, outcome: Direction) {
        self.history.push(pc, outcome);
    }

    /// Pattern table size.
    pub fn pattern_entries(&self) -> usize {
        self.pht.len()
    }

    /// History table size.
    pub fn history_entries(&self) -> usize {
        self.history.len()
    }

    /// Counter at pattern table entry `index`.
    pub fn counter(&self, index: usize) -> SaturatingCounter {
        self.pht.counter(index)
    }
}

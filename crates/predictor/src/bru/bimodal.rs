//! Bimodal Branch Predictor.
//!
//! One two-bit counter per address slice, with no history at all. Each branch
//! learns its own bias; branches whose low address bits collide share a counter.

use tracing::debug;

use super::{
    BranchPredictor,
    counter::{CounterTable, SaturatingCounter},
};
use crate::common::Direction;
use crate::config::BimodalConfig;

/// Bimodal Predictor structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BimodalPredictor {
    /// Branch History Table of two-bit counters, indexed by address.
    bht: CounterTable,
}

impl BimodalPredictor {
    /// Creates a new Bimodal Predictor with every counter weakly not-taken.
    pub fn new(config: &BimodalConfig) -> Self {
        let bht = CounterTable::new(config.table_bits, SaturatingCounter::WeaklyNotTaken);
        debug!(entries = bht.len(), "bimodal tables allocated");
        Self { bht }
    }

    /// Table index of the branch at `pc`.
    #[inline(always)]
    fn index(&self, pc: u32) -> usize {
        (pc as usize) & self.bht.mask()
    }

    /// Counter currently tracking the branch at `pc`.
    pub fn counter(&self, pc: u32) -> SaturatingCounter {
        self.bht.counter(self.index(pc))
    }
}

impl BranchPredictor for BimodalPredictor {
    fn predict_branch(&self, pc: u32) -> Direction {
        self.bht.read(self.index(pc))
    }

    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        let idx = self.index(pc);
        self.bht.update(idx, outcome);
    }
}

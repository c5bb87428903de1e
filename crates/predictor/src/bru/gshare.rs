//! GShare Branch Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `update()`: O(1)
//! - **Space Complexity:** O(2^G) where G is the history length (17 bits = 128K counters)
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Uncorrelated branches that alias into each other's counters

use tracing::debug;

use super::{
    BranchPredictor,
    counter::{CounterTable, SaturatingCounter},
    history::GlobalHistory,
};
use crate::common::Direction;
use crate::config::GShareConfig;

/// GShare Predictor structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GSharePredictor {
    /// Global History Register storing recent branch outcomes.
    ghr: GlobalHistory,
    /// Pattern History Table containing 2-bit saturating counters.
    pht: CounterTable,
}

impl GSharePredictor {
    /// Creates a new GShare Predictor with a `2^history_bits` entry table.
    pub fn new(config: &GShareConfig) -> Self {
        let pht = CounterTable::new(config.history_bits, SaturatingCounter::WeaklyNotTaken);
        debug!(
            history_bits = config.history_bits,
            entries = pht.len(),
            "gshare tables allocated"
        );
        Self {
            ghr: GlobalHistory::new(config.history_bits),
            pht,
        }
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// Computes the XOR of the low address bits and the low history bits.
    #[inline(always)]
    pub fn index(&self, pc: u32) -> usize {
        let mask = self.pht.mask();
        ((pc as usize) & mask) ^ self.ghr.index(mask)
    }

    /// Current global history value.
    pub fn history(&self) -> u64 {
        self.ghr.value()
    }

    /// Counter at PHT entry `index`.
    pub fn counter(&self, index: usize) -> SaturatingCounter {
        self.pht.counter(index)
    }
}

impl BranchPredictor for GSharePredictor {
    /// Returns taken if the counter at the hashed index is weakly or strongly taken.
    fn predict_branch(&self, pc: u32) -> Direction {
        self.pht.read(self.index(pc))
    }

    /// Updates the counter at the pre-update index, then shifts the outcome
    /// into the Global History Register.
    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        let idx = self.index(pc);
        self.pht.update(idx, outcome);
        self.ghr.push(outcome);
    }
}

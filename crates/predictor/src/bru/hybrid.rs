//! Hybrid (Perceptron x Local) Branch Predictor.
//!
//! Same shape as the tournament predictor, with the global pattern table replaced
//! by a perceptron. The local predictor is the primary component. The chooser is
//! indexed by its own bit-packed history register, kept separately from the
//! perceptron's sign history.

use tracing::debug;

use super::{
    BranchPredictor, chooser::ChooserTable, history::GlobalHistory, local::LocalPredictor,
    perceptron::PerceptronPredictor,
};
use crate::common::Direction;
use crate::config::HybridConfig;

/// Hybrid Predictor structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HybridPredictor {
    /// Local history and pattern tables (primary).
    local: LocalPredictor,
    /// Perceptron sub-predictor (alternate), with its own sign history.
    perceptron: PerceptronPredictor,
    /// Chooser table; "primary" is the local predictor.
    chooser: ChooserTable,
    /// History register dedicated to indexing the chooser.
    chooser_history: GlobalHistory,
}

impl HybridPredictor {
    /// Creates a new Hybrid Predictor based on the provided configuration.
    pub fn new(config: &HybridConfig) -> Self {
        let local = LocalPredictor::new(config.local_table_bits, config.local_history_bits);
        let chooser = ChooserTable::new(config.chooser_bits);
        debug!(
            local_history_entries = local.history_entries(),
            local_pattern_entries = local.pattern_entries(),
            chooser_entries = chooser.mask() + 1,
            "hybrid tables allocated"
        );
        Self {
            local,
            perceptron: PerceptronPredictor::new(&config.perceptron),
            chooser,
            chooser_history: GlobalHistory::new(config.chooser_bits),
        }
    }

    /// Prediction of the local component.
    #[inline(always)]
    pub fn predict_local(&self, pc: u32) -> Direction {
        self.local.predict(pc)
    }

    /// Prediction of the perceptron component.
    #[inline(always)]
    pub fn predict_perceptron(&self, pc: u32) -> Direction {
        self.perceptron.predict_branch(pc)
    }

    #[inline(always)]
    fn chooser_index(&self) -> usize {
        self.chooser_history.index(self.chooser.mask())
    }

    /// Chooser counter value (0..=3) for the current chooser history.
    pub fn chooser_state(&self) -> u8 {
        self.chooser.value(self.chooser_index())
    }

    /// Value of the chooser's history register.
    pub fn chooser_history(&self) -> u64 {
        self.chooser_history.value()
    }

    /// The perceptron component.
    pub fn perceptron(&self) -> &PerceptronPredictor {
        &self.perceptron
    }
}

impl BranchPredictor for HybridPredictor {
    fn predict_branch(&self, pc: u32) -> Direction {
        self.chooser.select(
            self.chooser_index(),
            self.predict_local(pc),
            self.predict_perceptron(pc),
        )
    }

    /// Updates the chooser from the pre-update component predictions, trains the
    /// local table and the perceptron, then shifts every history register.
    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        let local = self.predict_local(pc);
        let perceptron = self.predict_perceptron(pc);

        let choice_idx = self.chooser_index();
        self.chooser.update(choice_idx, local, perceptron, outcome);

        self.local.update_pattern(pc, outcome);
        // Trains the weights and shifts the sign history.
        self.perceptron.update_branch(pc, outcome);

        self.local.push_history(pc, outcome);
        self.chooser_history.push(outcome);
    }
}

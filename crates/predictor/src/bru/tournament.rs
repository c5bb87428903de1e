//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (chooser table) to select
//! between a Local predictor (PAg) and a Global predictor (GAg). This allows the
//! predictor to adapt to different types of branch behaviors.
//!
//! Chooser encoding: 0,1 select global; 2,3 select local. The chooser and the
//! global pattern table are both indexed by the global history register.

use tracing::debug;

use super::{
    BranchPredictor,
    chooser::ChooserTable,
    counter::{CounterTable, SaturatingCounter},
    history::GlobalHistory,
    local::LocalPredictor,
};
use crate::common::Direction;
use crate::config::TournamentConfig;

/// Tournament Predictor structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentPredictor {
    /// Global History Register.
    ghr: GlobalHistory,
    /// Global Pattern History Table, indexed by the GHR.
    global_pht: CounterTable,
    /// Local history and pattern tables.
    local: LocalPredictor,
    /// Chooser table; "primary" is the local predictor.
    chooser: ChooserTable,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor based on the provided configuration.
    pub fn new(config: &TournamentConfig) -> Self {
        let local = LocalPredictor::new(config.local_table_bits, config.local_history_bits);
        let global_pht =
            CounterTable::new(config.global_history_bits, SaturatingCounter::WeaklyNotTaken);
        let chooser = ChooserTable::new(config.chooser_bits);
        debug!(
            global_entries = global_pht.len(),
            local_history_entries = local.history_entries(),
            local_pattern_entries = local.pattern_entries(),
            chooser_entries = chooser.mask() + 1,
            "tournament tables allocated"
        );
        Self {
            ghr: GlobalHistory::new(config.global_history_bits),
            global_pht,
            local,
            chooser,
        }
    }

    /// Prediction of the local component.
    #[inline(always)]
    pub fn predict_local(&self, pc: u32) -> Direction {
        self.local.predict(pc)
    }

    /// Prediction of the global component. The address does not participate.
    #[inline(always)]
    pub fn predict_global(&self, _pc: u32) -> Direction {
        self.global_pht.read(self.global_index())
    }

    #[inline(always)]
    fn global_index(&self) -> usize {
        self.ghr.index(self.global_pht.mask())
    }

    #[inline(always)]
    fn chooser_index(&self) -> usize {
        self.ghr.index(self.chooser.mask())
    }

    /// Chooser counter value (0..=3) for the current global history.
    pub fn chooser_state(&self) -> u8 {
        self.chooser.value(self.chooser_index())
    }

    /// Current global history value.
    pub fn history(&self) -> u64 {
        self.ghr.value()
    }
}

impl BranchPredictor for TournamentPredictor {
    /// Queries both components and lets the chooser pick one.
    fn predict_branch(&self, pc: u32) -> Direction {
        self.chooser.select(
            self.chooser_index(),
            self.predict_local(pc),
            self.predict_global(pc),
        )
    }

    /// Updates the chooser from the pre-update component predictions, trains both
    /// pattern tables at their pre-update indices, then shifts both histories.
    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        let local = self.predict_local(pc);
        let global = self.predict_global(pc);

        let choice_idx = self.chooser_index();
        self.chooser.update(choice_idx, local, global, outcome);

        self.local.update_pattern(pc, outcome);
        let g_idx = self.global_index();
        self.global_pht.update(g_idx, outcome);

        self.local.push_history(pc, outcome);
        self.ghr.push(outcome);
    }
}

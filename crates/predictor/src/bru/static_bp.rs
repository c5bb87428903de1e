//! Static Branch Predictor.
//!
//! Predicts every conditional branch as taken and keeps no state, so training is
//! a no-op. Serves as the accuracy floor the dynamic predictors are compared against.

use super::BranchPredictor;
use crate::common::Direction;

/// Static "always taken" predictor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticPredictor;

impl StaticPredictor {
    /// Creates a new Static Predictor.
    pub fn new() -> Self {
        Self
    }
}

impl BranchPredictor for StaticPredictor {
    /// Always predicts taken.
    fn predict_branch(&self, _pc: u32) -> Direction {
        Direction::Taken
    }

    /// Keeps no state.
    fn update_branch(&mut self, _pc: u32, _outcome: Direction) {}
}

//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait that every direction predictor
//! implements. The protocol is predict-then-train: the driver asks for a prediction
//! when a conditional branch is fetched and reports the resolved outcome afterwards.

use crate::common::Direction;

/// Trait for conditional branch direction predictors.
pub trait BranchPredictor {
    /// Predicts the direction of the conditional branch at `pc`.
    ///
    /// This is a pure read: calling it repeatedly without an intervening
    /// [`update_branch`](Self::update_branch) returns the same answer.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    fn predict_branch(&self, pc: u32) -> Direction;

    /// Trains the predictor with the resolved outcome of the branch at `pc`.
    ///
    /// Every lookup inside the update uses the state as it was before this call;
    /// history registers are shifted last.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction
    /// * `outcome` - The direction the branch actually took
    fn update_branch(&mut self, pc: u32, outcome: Direction);
}

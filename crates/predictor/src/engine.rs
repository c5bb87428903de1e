//! Predictor Engine.
//!
//! The engine is the boundary between a trace-driven driver and the predictors.
//! It exposes the three entry points of the calling protocol:
//! 1. **Initialize:** Validate the configuration and allocate the selected tables.
//! 2. **Predict:** Pure lookup for a conditional branch.
//! 3. **Train:** Report a resolved branch; only conditional branches change state.

use tracing::{debug, trace};

use crate::bru::{BranchPredictor, BranchPredictorWrapper};
use crate::common::{Branch, ConfigError, Direction};
use crate::config::Config;

/// Owns the active predictor for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Engine {
    /// Active predictor.
    predictor: BranchPredictorWrapper,
    /// Display name, e.g. `Custom (Perceptron)`.
    name: String,
}

impl Engine {
    /// Validates `config` and builds the selected predictor with freshly reset tables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the active section of `config` is invalid.
    pub fn initialize(config: &Config) -> Result<Self, ConfigError> {
        let predictor = BranchPredictorWrapper::new(config)?;
        let name = config.predictor_name();
        debug!(predictor = %name, "predictor initialized");
        Ok(Self { predictor, name })
    }

    /// Predicts the conditional branch at `pc`.
    ///
    /// `target` and `direct` are accepted for interface compatibility and unused.
    #[inline]
    pub fn predict(&self, pc: u32, _target: u32, _direct: bool) -> Direction {
        self.predictor.predict_branch(pc)
    }

    /// Trains the predictor with a resolved branch.
    ///
    /// Calls, returns and unconditional jumps are accepted and leave every table
    /// untouched.
    #[inline]
    pub fn train(&mut self, branch: &Branch, outcome: Direction) {
        if !branch.is_conditional() {
            return;
        }
        trace!(pc = branch.pc, %outcome, "train");
        self.predictor.update_branch(branch.pc, outcome);
    }

    /// Display name of the active predictor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active predictor.
    pub fn predictor(&self) -> &BranchPredictorWrapper {
        &self.predictor
    }
}

//! Branch prediction unit (BRU) implementations.
//!
//! This module contains the conditional branch direction predictors: static,
//! bimodal, gshare, tournament, perceptron and the perceptron/local hybrid,
//! together with the building blocks they share (saturating counters, history
//! registers, chooser tables).

pub use self::branch_predictor::BranchPredictor;

/// Bimodal (per-address counter) predictor.
pub mod bimodal;

/// Branch predictor trait.
pub mod branch_predictor;

/// Chooser (meta-predictor) table.
pub mod chooser;

/// Two-bit saturating counters and counter tables.
pub mod counter;

/// Global history XOR address predictor (gshare algorithm).
pub mod gshare;

/// Global and per-address history registers.
pub mod history;

/// Local predictor combined with a perceptron under a chooser.
pub mod hybrid;

/// Per-address history (PAg) predictor component.
pub mod local;

/// Perceptron-based neural branch predictor.
pub mod perceptron;

/// Static branch predictor (always taken).
pub mod static_bp;

/// Tournament branch predictor (combines local and global predictors).
pub mod tournament;

use tracing::warn;

use self::{
    bimodal::BimodalPredictor, gshare::GSharePredictor, hybrid::HybridPredictor,
    perceptron::PerceptronPredictor, static_bp::StaticPredictor, tournament::TournamentPredictor,
};
use crate::common::{ConfigError, Direction};
use crate::config::{Config, CustomPredictor, Strategy};

/// Enum wrapper for static dispatch of Branch Predictors.
///
/// Exactly one variant is live per engine; each carries only its own tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BranchPredictorWrapper {
    /// Always taken.
    Static(StaticPredictor),
    /// Global history XOR address.
    GShare(GSharePredictor),
    /// Local/global tournament.
    Tournament(TournamentPredictor),
    /// Per-address counters (`Custom` slot).
    Bimodal(BimodalPredictor),
    /// Perceptron (`Custom` slot).
    Perceptron(PerceptronPredictor),
    /// Perceptron x local hybrid (`Custom` slot).
    Hybrid(HybridPredictor),
}

impl BranchPredictorWrapper {
    /// Validates the configuration and builds the selected predictor.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`Config::validate`]; no table is
    /// allocated in that case.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            warn!(predictor = %config.predictor_name(), %err, "rejected predictor configuration");
            return Err(err);
        }

        Ok(match config.strategy {
            Strategy::Static => Self::Static(StaticPredictor::new()),
            Strategy::GShare => Self::GShare(GSharePredictor::new(&config.gshare)),
            Strategy::Tournament => Self::Tournament(TournamentPredictor::new(&config.tournament)),
            Strategy::Custom => match config.custom {
                CustomPredictor::Bimodal => Self::Bimodal(BimodalPredictor::new(&config.bimodal)),
                CustomPredictor::Perceptron => {
                    Self::Perceptron(PerceptronPredictor::new(&config.perceptron))
                }
                CustomPredictor::Hybrid => Self::Hybrid(HybridPredictor::new(&config.hybrid)),
            },
        })
    }
}

impl BranchPredictor for BranchPredictorWrapper {
    #[inline(always)]
    fn predict_branch(&self, pc: u32) -> Direction {
        match self {
            Self::Static(bp) => bp.predict_branch(pc),
            Self::GShare(bp) => bp.predict_branch(pc),
            Self::Tournament(bp) => bp.predict_branch(pc),
            Self::Bimodal(bp) => bp.predict_branch(pc),
            Self::Perceptron(bp) => bp.predict_branch(pc),
            Self::Hybrid(bp) => bp.predict_branch(pc),
        }
    }

    #[inline(always)]
    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        match self {
            Self::Static(bp) => bp.update_branch(pc, outcome),
            Self::GShare(bp) => bp.update_branch(pc, outcome),
            Self::Tournament(bp) => bp.update_branch(pc, outcome),
            Self::Bimodal(bp) => bp.update_branch(pc, outcome),
            Self::Perceptron(bp) => bp.update_branch(pc, outcome),
            Self::Hybrid(bp) => bp.update_branch(pc, outcome),
        }
    }
}

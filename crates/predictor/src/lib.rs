//! Conditional branch direction prediction library.
//!
//! This crate implements the predictor core of a trace-driven branch prediction
//! simulator:
//! 1. **Primitives:** Two-bit saturating counters, history registers, chooser tables.
//! 2. **Predictors:** Static, bimodal, gshare, tournament, perceptron and a
//!    perceptron/local hybrid.
//! 3. **Engine:** The initialize / predict / train protocol a driver calls per branch.
//! 4. **Configuration:** Serde-backed widths and strategy selection with validation.
//!
//! ```
//! use bpsim_core::{Branch, Config, Direction, Engine};
//! use bpsim_core::config::Strategy;
//!
//! let mut engine = Engine::initialize(&Config::with_strategy(Strategy::GShare)).unwrap();
//! let branch = Branch::conditional(0x40_1000, 0x40_2000);
//!
//! assert_eq!(engine.predict(branch.pc, branch.target, branch.direct), Direction::NotTaken);
//! engine.train(&branch, Direction::Taken);
//! ```

/// Branch prediction unit (counters, histories, predictors, dispatch).
pub mod bru;
/// Common types (directions, branch descriptors, errors).
pub mod common;
/// Predictor configuration (defaults, enums, per-strategy sections).
pub mod config;
/// The initialize / predict / train entry points.
pub mod engine;

pub use crate::common::{Branch, BranchKind, ConfigError, Direction};
pub use crate::config::Config;
pub use crate::engine::Engine;

//! Configuration Error definitions.
//!
//! The predict/train path has no recoverable errors: every table index is produced
//! by masking. The only failure class is a configuration that cannot be realised,
//! which is rejected when the predictor is initialized:
//! 1. **Width Errors:** Zero-width or oversized tables and history registers.
//! 2. **Shape Mismatches:** A chooser table that the history indexing it cannot cover.
//! 3. **Perceptron Shape:** A weight table too large to allocate, or a threshold
//!    that would never train.
//! 4. **Parse Errors:** Malformed JSON configuration.

use thiserror::Error;

/// Reasons a predictor configuration is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A table or history width was zero.
    #[error("{field} must be at least 1 bit")]
    ZeroWidth {
        /// Configuration field name.
        field: &'static str,
    },

    /// A table or history width exceeds what the predictor supports.
    #[error("{field} is {bits} bits, maximum is {max}")]
    WidthTooLarge {
        /// Configuration field name.
        field: &'static str,
        /// Requested width.
        bits: usize,
        /// Largest supported width.
        max: usize,
    },

    /// The chooser table has more entries than its indexing history can address.
    #[error(
        "{field} is {chooser_bits} bits but its index history is only {history_bits} bits wide"
    )]
    ChooserExceedsHistory {
        /// Configuration field name.
        field: &'static str,
        /// Requested chooser index width.
        chooser_bits: usize,
        /// Width of the history register indexing the chooser.
        history_bits: usize,
    },

    /// The perceptron weight table would exceed the supported size.
    #[error("perceptron table holds {weights} weights, maximum is {max}")]
    TooManyWeights {
        /// Rows times (history length + bias).
        weights: u64,
        /// Largest supported weight count.
        max: u64,
    },

    /// The perceptron training threshold must be positive.
    #[error("perceptron threshold must be positive, got {0}")]
    NonPositiveThreshold(i32),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

//! Driver errors.

use std::io;
use std::path::PathBuf;

use bpsim_core::ConfigError;
use thiserror::Error;

use crate::trace::TraceError;

/// Anything that stops a run before the report is printed.
#[derive(Debug, Error)]
pub enum CliError {
    /// A trace or configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The predictor configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace contained a malformed record.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Writing verbose output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

//! Trace replay loop.
//!
//! For every record: conditional branches are predicted and scored, then every
//! record is handed to the engine for training.

use std::io::{BufRead, Write};

use bpsim_core::Engine;
use tracing::info;

use crate::error::CliError;
use crate::stats::BranchStats;
use crate::trace::TraceReader;

/// Replays `trace` through `engine`.
///
/// With `verbose` set, writes `pc prediction outcome` per conditional branch to `out`.
pub fn simulate<R: BufRead, W: Write>(
    engine: &mut Engine,
    trace: TraceReader<R>,
    verbose: bool,
    out: &mut W,
) -> Result<BranchStats, CliError> {
    let mut stats = BranchStats::new(engine.name());

    for record in trace {
        let record = record?;
        let branch = record.branch;

        if branch.is_conditional() {
            let prediction = engine.predict(branch.pc, branch.target, branch.direct);
            stats.record_prediction(prediction, record.outcome);
            if verbose {
                writeln!(
                    out,
                    "{:#x} {} {}",
                    branch.pc,
                    prediction.bit(),
                    record.outcome.bit()
                )?;
            }
        } else {
            stats.record_unconditional(branch.kind);
        }

        engine.train(&branch, record.outcome);
    }

    info!(
        branches = stats.branches,
        incorrect = stats.incorrect,
        "trace replay finished"
    );
    Ok(stats)
}

//! Simulation statistics collection and reporting.
//!
//! Tracks how well the configured predictor did over one trace:
//! 1. **Conditional branches:** Lookups and mispredictions, plus the derived rate.
//! 2. **Unconditional records:** Calls, returns and jumps seen (trained, never predicted).

use std::fmt;

use bpsim_core::{BranchKind, Direction};

/// Branch prediction statistics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchStats {
    /// Display name of the predictor.
    pub name: String,
    /// Conditional branches predicted.
    pub branches: u64,
    /// Conditional branches mispredicted.
    pub incorrect: u64,
    /// Function calls seen.
    pub calls: u64,
    /// Function returns seen.
    pub returns: u64,
    /// Other unconditional jumps seen.
    pub jumps: u64,
}

impl BranchStats {
    /// Creates empty statistics for the named predictor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Records a predicted conditional branch.
    pub fn record_prediction(&mut self, prediction: Direction, outcome: Direction) {
        self.branches += 1;
        if prediction != outcome {
            self.incorrect += 1;
        }
    }

    /// Records an unconditional record of the given kind.
    pub fn record_unconditional(&mut self, kind: BranchKind) {
        match kind {
            BranchKind::Call => self.calls += 1,
            BranchKind::Return => self.returns += 1,
            BranchKind::Jump => self.jumps += 1,
            BranchKind::Conditional => {}
        }
    }

    /// Mispredictions as a percentage of conditional branches (0 for an empty trace).
    pub fn misprediction_rate(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            100.0 * (self.incorrect as f64 / self.branches as f64)
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for BranchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "BRANCH PREDICTION ({})", self.name)?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "Branches:           {:>10}", self.branches)?;
        writeln!(f, "Incorrect:          {:>10}", self.incorrect)?;
        writeln!(f, "Misprediction Rate: {:>10.3}", self.misprediction_rate())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "UNCONDITIONAL")?;
        writeln!(f, "  calls             {}", self.calls)?;
        writeln!(f, "  returns           {}", self.returns)?;
        writeln!(f, "  jumps             {}", self.jumps)?;
        writeln!(f, "==========================================================")
    }
}

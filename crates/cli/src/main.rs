//! Trace-driven branch predictor simulator CLI.
//!
//! This binary replays a text branch trace through one predictor and prints a
//! misprediction report. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then command-line overrides.
//! 2. **Replay:** Predict every conditional branch, train on every record.
//! 3. **Report:** Branch counts and misprediction rate.

mod error;
mod simulate;
mod stats;
mod trace;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bpsim_core::config::{CustomPredictor, Strategy};
use bpsim_core::{Config, Engine};
use clap::{ArgGroup, Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::simulate::simulate;
use crate::trace::TraceReader;

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Trace-driven branch direction predictor simulator",
    long_about = "Replay a branch trace through a predictor and report the misprediction rate.\n\nEach trace line is `<pc> <outcome>` or `<pc> <target> <outcome> <conditional> <call> <return> <direct>`.\n\nExamples:\n  bpsim --gshare --ghist-bits 13 trace.txt\n  bpsim --custom --custom-kind perceptron trace.txt\n  zcat trace.gz | bpsim --tournament"
)]
#[command(group(
    ArgGroup::new("strategy").args(["static_bp", "gshare", "tournament", "custom"])
))]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Always predict taken.
    #[arg(long = "static")]
    static_bp: bool,

    /// Gshare predictor (default).
    #[arg(long)]
    gshare: bool,

    /// Local/global tournament predictor.
    #[arg(long)]
    tournament: bool,

    /// Custom predictor slot (see --custom-kind).
    #[arg(long)]
    custom: bool,

    /// Predictor in the custom slot.
    #[arg(long, value_enum)]
    custom_kind: Option<CustomKind>,

    /// Gshare global history width.
    #[arg(long, value_name = "BITS")]
    ghist_bits: Option<usize>,

    /// JSON predictor configuration; command-line flags override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print `pc prediction outcome` per conditional branch and enable debug logs.
    #[arg(short, long)]
    verbose: bool,

    /// Trace file; reads stdin when omitted.
    trace: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CustomKind {
    /// Per-address 2-bit counters.
    Bimodal,
    /// Global-history perceptron.
    Perceptron,
    /// Local predictor and perceptron under a chooser.
    Hybrid,
}

impl From<CustomKind> for CustomPredictor {
    fn from(kind: CustomKind) -> Self {
        match kind {
            CustomKind::Bimodal => Self::Bimodal,
            CustomKind::Perceptron => Self::Perceptron,
            CustomKind::Hybrid => Self::Hybrid,
        }
    }
}

impl Cli {
    fn strategy(&self) -> Option<Strategy> {
        if self.static_bp {
            Some(Strategy::Static)
        } else if self.gshare {
            Some(Strategy::GShare)
        } else if self.tournament {
            Some(Strategy::Tournament)
        } else if self.custom {
            Some(Strategy::Custom)
        } else {
            None
        }
    }

    /// Resolves the configuration: file (or defaults), then flag overrides.
    fn resolve_config(&self) -> Result<Config, CliError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json(&read_to_string(path)?)?,
            None => Config::default(),
        };

        if let Some(strategy) = self.strategy() {
            config.strategy = strategy;
        }
        if let Some(kind) = self.custom_kind {
            config.custom = kind.into();
        }
        if let Some(bits) = self.ghist_bits {
            config.gshare.history_bits = bits;
        }
        Ok(config)
    }
}

fn read_to_string(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn open_trace(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let mut engine = Engine::initialize(&config)?;
    let trace = TraceReader::new(open_trace(cli.trace.as_deref())?);
    let mut stdout = io::stdout().lock();
    let stats = simulate(&mut engine, trace, cli.verbose, &mut stdout)?;
    drop(stdout);

    stats.print();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "simulation failed");
            eprintln!("bpsim: {err}");
            ExitCode::FAILURE
        }
    }
}

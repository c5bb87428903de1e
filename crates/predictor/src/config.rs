//! Configuration system for the branch predictors.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the predictor engine. It provides:
//! 1. **Defaults:** Baseline table and history widths for every strategy.
//! 2. **Structures:** One section per predictor, all deserializable from JSON.
//! 3. **Enums:** The strategy slot and the `Custom` sub-strategy.
//! 4. **Validation:** Width and shape checks run once, before any table is allocated.
//!
//! Configuration is supplied as JSON by the driver (`--config`) or built with
//! `Config::default()`. Widths are log2 entry counts unless stated otherwise.
//! Unknown keys are rejected so a misspelled field cannot fall back to its default.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the predictors.
mod defaults {
    /// Bimodal counter table index width (256K entries).
    pub const BIMODAL_TABLE_BITS: usize = 18;

    /// Gshare global history width, which is also the counter table index width.
    pub const GSHARE_HISTORY_BITS: usize = 17;

    /// Tournament global history width (global pattern table has 64K entries).
    pub const TOURNAMENT_GLOBAL_BITS: usize = 16;

    /// Tournament chooser table index width (64K entries).
    pub const TOURNAMENT_CHOOSER_BITS: usize = 16;

    /// Tournament local history pattern width (local pattern table has 1K entries).
    pub const TOURNAMENT_LOCAL_HIST_BITS: usize = 10;

    /// Tournament local history table index width (1K branches tracked).
    pub const TOURNAMENT_LOCAL_TABLE_BITS: usize = 10;

    /// Perceptron weight table index width (4K perceptrons).
    pub const PERCEPTRON_TABLE_BITS: usize = 12;

    /// Perceptron history length (weights per perceptron, excluding the bias).
    pub const PERCEPTRON_HISTORY: usize = 16;

    /// Perceptron training threshold (theta).
    pub const PERCEPTRON_THRESHOLD: i32 = 35;

    /// Hybrid chooser table index width, also the width of its private history.
    pub const HYBRID_CHOOSER_BITS: usize = 12;

    /// Hybrid local history pattern width.
    pub const HYBRID_LOCAL_HIST_BITS: usize = 10;

    /// Hybrid local history table index width.
    pub const HYBRID_LOCAL_TABLE_BITS: usize = 10;
}

/// Largest supported table index width (256M entries).
pub const MAX_TABLE_BITS: usize = 28;

/// Longest supported perceptron history.
pub const MAX_PERCEPTRON_HISTORY: usize = 64;

/// Largest supported perceptron weight table, biases included (16M weights, 32 MiB).
pub const MAX_PERCEPTRON_WEIGHTS: u64 = 1 << 24;

/// Branch prediction strategy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Strategy {
    /// Always predict taken.
    Static,
    /// Global history XOR address indexed counter table.
    #[default]
    #[serde(alias = "Gshare", alias = "gshare")]
    GShare,
    /// Local/global tournament with a chooser table.
    #[serde(alias = "tournament")]
    Tournament,
    /// One of the [`CustomPredictor`] variants.
    #[serde(alias = "custom")]
    Custom,
}

impl Strategy {
    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::GShare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Custom => "Custom",
        }
    }
}

/// Predictor occupying the `Custom` strategy slot.
///
/// The variants are mutually exclusive; exactly one is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CustomPredictor {
    /// Per-address 2-bit counters, no history.
    #[serde(alias = "bimodal")]
    Bimodal,
    /// Global-history perceptron.
    #[serde(alias = "perceptron")]
    Perceptron,
    /// Local predictor and perceptron arbitrated by a chooser.
    #[default]
    #[serde(alias = "hybrid")]
    Hybrid,
}

impl CustomPredictor {
    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bimodal => "Bimodal",
            Self::Perceptron => "Perceptron",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Root configuration structure.
///
/// Only the section belonging to the selected strategy is validated and used.
///
/// # Examples
///
/// ```
/// use bpsim_core::config::{Config, CustomPredictor, Strategy};
///
/// let json = r#"{
///     "strategy": "Custom",
///     "custom": "Perceptron",
///     "perceptron": { "history_length": 24, "threshold": 37 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.strategy, Strategy::Custom);
/// assert_eq!(config.custom, CustomPredictor::Perceptron);
/// assert_eq!(config.perceptron.history_length, 24);
/// assert_eq!(config.perceptron.table_bits, 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Strategy slot.
    #[serde(default)]
    pub strategy: Strategy,
    /// Predictor used when `strategy` is `Custom`.
    #[serde(default)]
    pub custom: CustomPredictor,
    /// Bimodal predictor configuration.
    #[serde(default)]
    pub bimodal: BimodalConfig,
    /// Gshare predictor configuration.
    #[serde(default)]
    pub gshare: GShareConfig,
    /// Tournament predictor configuration.
    #[serde(default)]
    pub tournament: TournamentConfig,
    /// Perceptron predictor configuration.
    #[serde(default)]
    pub perceptron: PerceptronConfig,
    /// Hybrid predictor configuration.
    #[serde(default)]
    pub hybrid: HybridConfig,
}

impl Config {
    /// Creates a default configuration for `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Creates a default configuration selecting `custom` in the `Custom` slot.
    pub fn with_custom(custom: CustomPredictor) -> Self {
        Self {
            strategy: Strategy::Custom,
            custom,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a field
    /// has the wrong type. Widths are not checked here; see [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the section of the selected strategy.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the active section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.strategy {
            Strategy::Static => Ok(()),
            Strategy::GShare => self.gshare.validate(),
            Strategy::Tournament => self.tournament.validate(),
            Strategy::Custom => match self.custom {
                CustomPredictor::Bimodal => self.bimodal.validate(),
                CustomPredictor::Perceptron => self.perceptron.validate(),
                CustomPredictor::Hybrid => self.hybrid.validate(),
            },
        }
    }

    /// Display name of the configured predictor, e.g. `Custom (Hybrid)`.
    pub fn predictor_name(&self) -> String {
        match self.strategy {
            Strategy::Custom => format!("Custom ({})", self.custom.name()),
            other => other.name().to_string(),
        }
    }
}

/// Rejects zero widths and widths above `max`.
fn check_width(field: &'static str, bits: usize, max: usize) -> Result<(), ConfigError> {
    if bits == 0 {
        return Err(ConfigError::ZeroWidth { field });
    }
    if bits > max {
        return Err(ConfigError::WidthTooLarge { field, bits, max });
    }
    Ok(())
}

/// Rejects a chooser that has more entries than its indexing history can reach.
fn check_chooser(
    field: &'static str,
    chooser_bits: usize,
    history_bits: usize,
) -> Result<(), ConfigError> {
    check_width(field, chooser_bits, MAX_TABLE_BITS)?;
    if chooser_bits > history_bits {
        return Err(ConfigError::ChooserExceedsHistory {
            field,
            chooser_bits,
            history_bits,
        });
    }
    Ok(())
}

/// Bimodal predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BimodalConfig {
    /// Counter table index width
    #[serde(default = "BimodalConfig::default_table_bits")]
    pub table_bits: usize,
}

impl BimodalConfig {
    fn default_table_bits() -> usize {
        defaults::BIMODAL_TABLE_BITS
    }

    /// Checks the table width.
    ///
    /// # Errors
    ///
    /// Returns a width error if `table_bits` is zero or too large.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width("bimodal.table_bits", self.table_bits, MAX_TABLE_BITS)
    }
}

impl Default for BimodalConfig {
    fn default() -> Self {
        Self {
            table_bits: defaults::BIMODAL_TABLE_BITS,
        }
    }
}

/// Gshare predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GShareConfig {
    /// Global history width; the counter table has `2^history_bits` entries
    #[serde(default = "GShareConfig::default_history_bits")]
    pub history_bits: usize,
}

impl GShareConfig {
    fn default_history_bits() -> usize {
        defaults::GSHARE_HISTORY_BITS
    }

    /// Checks the history width.
    ///
    /// # Errors
    ///
    /// Returns a width error if `history_bits` is zero or too large.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width("gshare.history_bits", self.history_bits, MAX_TABLE_BITS)
    }
}

impl Default for GShareConfig {
    fn default() -> Self {
        Self {
            history_bits: defaults::GSHARE_HISTORY_BITS,
        }
    }
}

/// Tournament predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TournamentConfig {
    /// Global history width (global pattern table index)
    #[serde(default = "TournamentConfig::default_global")]
    pub global_history_bits: usize,

    /// Chooser table index width; indexed by the global history
    #[serde(default = "TournamentConfig::default_chooser")]
    pub chooser_bits: usize,

    /// Local history pattern width (local pattern table index)
    #[serde(default = "TournamentConfig::default_local_hist")]
    pub local_history_bits: usize,

    /// Local history table index width (branches tracked)
    #[serde(default = "TournamentConfig::default_local_table")]
    pub local_table_bits: usize,
}

impl TournamentConfig {
    fn default_global() -> usize {
        defaults::TOURNAMENT_GLOBAL_BITS
    }

    fn default_chooser() -> usize {
        defaults::TOURNAMENT_CHOOSER_BITS
    }

    fn default_local_hist() -> usize {
        defaults::TOURNAMENT_LOCAL_HIST_BITS
    }

    fn default_local_table() -> usize {
        defaults::TOURNAMENT_LOCAL_TABLE_BITS
    }

    /// Checks every width and the chooser/history relationship.
    ///
    /// # Errors
    ///
    /// Returns a width error for any zero or oversized width, or
    /// [`ConfigError::ChooserExceedsHistory`] if the chooser is wider than the
    /// global history.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width(
            "tournament.global_history_bits",
            self.global_history_bits,
            MAX_TABLE_BITS,
        )?;
        check_width(
            "tournament.local_history_bits",
            self.local_history_bits,
            MAX_TABLE_BITS,
        )?;
        check_width(
            "tournament.local_table_bits",
            self.local_table_bits,
            MAX_TABLE_BITS,
        )?;
        check_chooser(
            "tournament.chooser_bits",
            self.chooser_bits,
            self.global_history_bits,
        )
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            global_history_bits: defaults::TOURNAMENT_GLOBAL_BITS,
            chooser_bits: defaults::TOURNAMENT_CHOOSER_BITS,
            local_history_bits: defaults::TOURNAMENT_LOCAL_HIST_BITS,
            local_table_bits: defaults::TOURNAMENT_LOCAL_TABLE_BITS,
        }
    }
}

/// Perceptron predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerceptronConfig {
    /// Weight table index width
    #[serde(default = "PerceptronConfig::default_table_bits")]
    pub table_bits: usize,

    /// Global history length (weights per perceptron, excluding the bias)
    #[serde(default = "PerceptronConfig::default_history")]
    pub history_length: usize,

    /// Training threshold: weights also train when `|y| < threshold`
    #[serde(default = "PerceptronConfig::default_threshold")]
    pub threshold: i32,
}

impl PerceptronConfig {
    fn default_table_bits() -> usize {
        defaults::PERCEPTRON_TABLE_BITS
    }

    fn default_history() -> usize {
        defaults::PERCEPTRON_HISTORY
    }

    fn default_threshold() -> i32 {
        defaults::PERCEPTRON_THRESHOLD
    }

    /// Total weights in the table: `2^table_bits` rows of bias plus history
    /// weights, saturating at `u64::MAX`.
    pub fn weight_count(&self) -> u64 {
        1u64.checked_shl(self.table_bits as u32)
            .unwrap_or(u64::MAX)
            .saturating_mul(self.history_length as u64 + 1)
    }

    /// Checks widths and the training threshold.
    ///
    /// # Errors
    ///
    /// Returns a width error for a zero or oversized table or history,
    /// [`ConfigError::TooManyWeights`] if the rows together exceed
    /// [`MAX_PERCEPTRON_WEIGHTS`], or [`ConfigError::NonPositiveThreshold`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width("perceptron.table_bits", self.table_bits, MAX_TABLE_BITS)?;
        check_width(
            "perceptron.history_length",
            self.history_length,
            MAX_PERCEPTRON_HISTORY,
        )?;
        let weights = self.weight_count();
        if weights > MAX_PERCEPTRON_WEIGHTS {
            return Err(ConfigError::TooManyWeights {
                weights,
                max: MAX_PERCEPTRON_WEIGHTS,
            });
        }
        if self.threshold <= 0 {
            return Err(ConfigError::NonPositiveThreshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        Self {
            table_bits: defaults::PERCEPTRON_TABLE_BITS,
            history_length: defaults::PERCEPTRON_HISTORY,
            threshold: defaults::PERCEPTRON_THRESHOLD,
        }
    }
}

/// Hybrid (perceptron x local) predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HybridConfig {
    /// Chooser table index width, also the width of the chooser's private history
    #[serde(default = "HybridConfig::default_chooser")]
    pub chooser_bits: usize,

    /// Local history pattern width
    #[serde(default = "HybridConfig::default_local_hist")]
    pub local_history_bits: usize,

    /// Local history table index width
    #[serde(default = "HybridConfig::default_local_table")]
    pub local_table_bits: usize,

    /// Perceptron sub-predictor
    #[serde(default)]
    pub perceptron: PerceptronConfig,
}

impl HybridConfig {
    fn default_chooser() -> usize {
        defaults::HYBRID_CHOOSER_BITS
    }

    fn default_local_hist() -> usize {
        defaults::HYBRID_LOCAL_HIST_BITS
    }

    fn default_local_table() -> usize {
        defaults::HYBRID_LOCAL_TABLE_BITS
    }

    /// Checks the chooser, the local tables and the perceptron section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width("hybrid.chooser_bits", self.chooser_bits, MAX_TABLE_BITS)?;
        check_width(
            "hybrid.local_history_bits",
            self.local_history_bits,
            MAX_TABLE_BITS,
        )?;
        check_width(
            "hybrid.local_table_bits",
            self.local_table_bits,
            MAX_TABLE_BITS,
        )?;
        self.perceptron.validate()
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            chooser_bits: defaults::HYBRID_CHOOSER_BITS,
            local_history_bits: defaults::HYBRID_LOCAL_HIST_BITS,
            local_table_bits: defaults::HYBRID_LOCAL_TABLE_BITS,
            perceptron: PerceptronConfig::default(),
        }
    }
}

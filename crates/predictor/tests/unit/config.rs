//! # Configuration Tests
//!
//! Verifies defaults, JSON parsing (including field defaults and aliases), and
//! validation of the active strategy section.

use bpsim_core::ConfigError;
use bpsim_core::config::{
    Config, CustomPredictor, GShareConfig, MAX_PERCEPTRON_WEIGHTS, MAX_TABLE_BITS,
    PerceptronConfig, Strategy, TournamentConfig,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.strategy, Strategy::GShare);
    assert_eq!(config.custom, CustomPredictor::Hybrid);
    assert_eq!(config.bimodal.table_bits, 18);
    assert_eq!(config.gshare.history_bits, 17);
    assert_eq!(config.tournament.global_history_bits, 16);
    assert_eq!(config.tournament.chooser_bits, 16);
    assert_eq!(config.tournament.local_history_bits, 10);
    assert_eq!(config.tournament.local_table_bits, 10);
    assert_eq!(config.perceptron.table_bits, 12);
    assert_eq!(config.perceptron.history_length, 16);
    assert_eq!(config.perceptron.threshold, 35);
    assert_eq!(config.hybrid.chooser_bits, 12);
    assert_eq!(config.hybrid.perceptron, PerceptronConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let json = r#"{ "strategy": "Tournament", "tournament": { "chooser_bits": 12 } }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.strategy, Strategy::Tournament);
    assert_eq!(
        config.tournament,
        TournamentConfig {
            chooser_bits: 12,
            ..TournamentConfig::default()
        }
    );
}

#[rstest]
#[case(r#""Static""#, Strategy::Static)]
#[case(r#""GShare""#, Strategy::GShare)]
#[case(r#""Gshare""#, Strategy::GShare)]
#[case(r#""gshare""#, Strategy::GShare)]
#[case(r#""tournament""#, Strategy::Tournament)]
#[case(r#""custom""#, Strategy::Custom)]
fn test_strategy_names(#[case] value: &str, #[case] expected: Strategy) {
    let config = Config::from_json(&format!(r#"{{ "strategy": {value} }}"#)).unwrap();
    assert_eq!(config.strategy, expected);
}

#[rstest]
#[case(r#""Bimodal""#, CustomPredictor::Bimodal)]
#[case(r#""bimodal""#, CustomPredictor::Bimodal)]
#[case(r#""perceptron""#, CustomPredictor::Perceptron)]
#[case(r#""Hybrid""#, CustomPredictor::Hybrid)]
fn test_custom_names(#[case] value: &str, #[case] expected: CustomPredictor) {
    let config =
        Config::from_json(&format!(r#"{{ "strategy": "Custom", "custom": {value} }}"#)).unwrap();
    assert_eq!(config.custom, expected);
}

#[test]
fn test_nested_hybrid_perceptron() {
    let json = r#"{
        "strategy": "Custom",
        "hybrid": { "perceptron": { "history_length": 32 } }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.hybrid.perceptron.history_length, 32);
    assert_eq!(config.hybrid.perceptron.threshold, 35);
    assert_eq!(config.perceptron.history_length, 16);
}

#[rstest]
#[case("not json")]
#[case(r#"{ "strategy": "Neural" }"#)]
#[case(r#"{ "gshare": { "history_bits": -1 } }"#)]
#[case(r#"{ "strategy": "Tournament", "tournament": { "chooser_bit": 4 } }"#)]
#[case(r#"{ "strategy": "Custom", "hybrid": { "perceptron": { "theta": 20 } } }"#)]
#[case(r#"{ "stratgey": "Static" }"#)]
fn test_parse_errors(#[case] json: &str) {
    assert!(matches!(Config::from_json(json), Err(ConfigError::Parse(_))));
}

#[test]
fn test_zero_gshare_history_rejected() {
    let config = Config {
        gshare: GShareConfig { history_bits: 0 },
        ..Config::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::ZeroWidth {
            field: "gshare.history_bits"
        })
    );
}

#[test]
fn test_oversized_width_rejected() {
    let mut config = Config::with_custom(CustomPredictor::Bimodal);
    config.bimodal.table_bits = MAX_TABLE_BITS + 1;
    assert_eq!(
        config.validate(),
        Err(ConfigError::WidthTooLarge {
            field: "bimodal.table_bits",
            bits: 29,
            max: 28,
        })
    );
}

#[test]
fn test_tournament_chooser_wider_than_history() {
    let mut config = Config::with_strategy(Strategy::Tournament);
    config.tournament.chooser_bits = 17;
    assert_eq!(
        config.validate(),
        Err(ConfigError::ChooserExceedsHistory {
            field: "tournament.chooser_bits",
            chooser_bits: 17,
            history_bits: 16,
        })
    );
}

#[rstest]
#[case(0)]
#[case(-5)]
fn test_non_positive_threshold(#[case] threshold: i32) {
    let mut config = Config::with_custom(CustomPredictor::Perceptron);
    config.perceptron.threshold = threshold;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveThreshold(threshold))
    );
}

#[test]
fn test_perceptron_history_limit() {
    let mut config = Config::with_custom(CustomPredictor::Perceptron);
    config.perceptron.history_length = 65;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::WidthTooLarge {
            field: "perceptron.history_length",
            ..
        })
    ));
}

/// Widths that are each in range but together describe a table too large to
/// allocate.
#[test]
fn test_perceptron_table_size_limit() {
    let mut config = Config::with_custom(CustomPredictor::Perceptron);
    config.perceptron.table_bits = MAX_TABLE_BITS;
    config.perceptron.history_length = 64;
    assert_eq!(
        config.validate(),
        Err(ConfigError::TooManyWeights {
            weights: (1 << 28) * 65,
            max: MAX_PERCEPTRON_WEIGHTS,
        })
    );
}

#[rstest]
#[case(20, 15, true)]
#[case(20, 16, false)]
#[case(12, 64, true)]
#[case(19, 64, false)]
fn test_perceptron_weight_boundary(
    #[case] table_bits: usize,
    #[case] history_length: usize,
    #[case] accepted: bool,
) {
    let config = PerceptronConfig {
        table_bits,
        history_length,
        ..PerceptronConfig::default()
    };
    assert_eq!(config.validate().is_ok(), accepted);
}

#[test]
fn test_hybrid_perceptron_table_size_limit() {
    let mut config = Config::with_custom(CustomPredictor::Hybrid);
    config.hybrid.perceptron.table_bits = 24;
    config.hybrid.perceptron.history_length = 16;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::TooManyWeights { .. })
    ));
}

#[test]
fn test_hybrid_checks_nested_perceptron() {
    let mut config = Config::with_custom(CustomPredictor::Hybrid);
    config.hybrid.perceptron.threshold = 0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::NonPositiveThreshold(0))
    );
}

/// Only the section of the selected strategy is checked.
#[test]
fn test_inactive_section_ignored() {
    let mut config = Config::with_strategy(Strategy::Static);
    config.gshare.history_bits = 0;
    config.tournament.chooser_bits = 40;
    config.perceptron.threshold = -1;
    assert!(config.validate().is_ok());
}

#[rstest]
#[case(Config::with_strategy(Strategy::Static), "Static")]
#[case(Config::with_strategy(Strategy::GShare), "Gshare")]
#[case(Config::with_strategy(Strategy::Tournament), "Tournament")]
#[case(Config::with_custom(CustomPredictor::Bimodal), "Custom (Bimodal)")]
#[case(Config::with_custom(CustomPredictor::Perceptron), "Custom (Perceptron)")]
#[case(Config::with_strategy(Strategy::Custom), "Custom (Hybrid)")]
fn test_predictor_name(#[case] config: Config, #[case] expected: &str) {
    assert_eq!(config.predictor_name(), expected);
}

//! # Direction Tests
//!
//! Verifies the history-bit and perceptron-sign encodings of a branch direction.

use bpsim_core::Direction;

#[test]
fn test_default_is_not_taken() {
    assert_eq!(Direction::default(), Direction::NotTaken);
}

#[test]
fn test_bool_round_trip() {
    assert_eq!(Direction::from(true), Direction::Taken);
    assert_eq!(Direction::from(false), Direction::NotTaken);
    assert!(bool::from(Direction::Taken));
    assert!(!bool::from(Direction::NotTaken));
}

#[test]
fn test_history_bit_encoding() {
    assert_eq!(Direction::Taken.bit(), 1);
    assert_eq!(Direction::NotTaken.bit(), 0);
}

#[test]
fn test_perceptron_sign_encoding() {
    assert_eq!(Direction::Taken.sign(), 1);
    assert_eq!(Direction::NotTaken.sign(), -1);
}

#[test]
fn test_not_flips_direction() {
    assert_eq!(!Direction::Taken, Direction::NotTaken);
    assert_eq!(!Direction::NotTaken, Direction::Taken);
}

#[test]
fn test_display() {
    assert_eq!(Direction::Taken.to_string(), "T");
    assert_eq!(Direction::NotTaken.to_string(), "N");
}

//! # GShare Predictor Tests
//!
//! Verifies the initial state, the address XOR history index walk, and training
//! order (counter first, then history).

use bpsim_core::Direction::{self, NotTaken, Taken};
use bpsim_core::bru::BranchPredictor;
use bpsim_core::bru::counter::SaturatingCounter;
use bpsim_core::bru::gshare::GSharePredictor;
use bpsim_core::config::GShareConfig;

fn gshare(history_bits: usize) -> GSharePredictor {
    GSharePredictor::new(&GShareConfig { history_bits })
}

/// Train a predictor by feeding `n` iterations of the same branch outcome.
fn train<P: BranchPredictor>(bp: &mut P, pc: u32, outcome: Direction, n: usize) {
    for _ in 0..n {
        bp.update_branch(pc, outcome);
    }
}

/// Every counter starts weakly not-taken.
#[test]
fn gshare_initial_not_taken() {
    let bp = gshare(17);
    for pc in (0..0x4_0000u32).step_by(0x1111) {
        assert_eq!(bp.predict_branch(pc), NotTaken);
    }
    assert_eq!(bp.history(), 0);
}

/// Two-bit history over a four-entry table, branch at address 0.
///
/// The index walks 0, 1, 3, 2: every lookup lands on a fresh weakly-not-taken
/// counter, so all four predictions are not-taken. The fifth lookup returns to
/// index 1, trained taken on step 2.
#[test]
fn gshare_two_bit_history_walk() {
    let mut bp = gshare(2);
    let outcomes = [Taken, Taken, NotTaken, Taken];
    let expected_idx = [0, 1, 3, 2];
    let expected_pred = [NotTaken, NotTaken, NotTaken, NotTaken];

    for i in 0..outcomes.len() {
        assert_eq!(bp.index(0), expected_idx[i], "index before step {i}");
        assert_eq!(bp.predict_branch(0), expected_pred[i], "prediction before step {i}");
        bp.update_branch(0, outcomes[i]);
    }

    assert_eq!(bp.history(), 0b01);
    assert_eq!(bp.counter(0), SaturatingCounter::WeaklyTaken);
    assert_eq!(bp.counter(1), SaturatingCounter::WeaklyTaken);
    assert_eq!(bp.counter(2), SaturatingCounter::WeaklyTaken);
    assert_eq!(bp.counter(3), SaturatingCounter::StronglyNotTaken);

    assert_eq!(bp.index(0), 1);
    assert_eq!(bp.predict_branch(0), Taken);
}

/// Address bits and history bits are XORed.
#[test]
fn gshare_index_xors_address_and_history() {
    let mut bp = gshare(4);
    bp.update_branch(0, Taken);
    bp.update_branch(0, NotTaken);
    assert_eq!(bp.history(), 0b10);
    assert_eq!(bp.index(0b1100), 0b1110);
    // Address bits above the table width are ignored.
    assert_eq!(bp.index(0xF0 | 0b1100), 0b1110);
}

/// Once the history saturates to all ones, one counter is reinforced.
#[test]
fn gshare_learns_taken() {
    let mut bp = gshare(12);
    let pc = 0x1000;
    train(&mut bp, pc, Taken, 20);
    assert_eq!(bp.predict_branch(pc), Taken);
}

/// GShare learns not-taken after repeated not-taken updates.
#[test]
fn gshare_learns_not_taken() {
    let mut bp = gshare(12);
    let pc = 0x1000;
    train(&mut bp, pc, Taken, 20);
    train(&mut bp, pc, NotTaken, 20);
    assert_eq!(bp.predict_branch(pc), NotTaken);
}

/// The same branch maps to different counters under different histories.
#[test]
fn gshare_context_sensitive() {
    let mut a = gshare(8);
    let mut b = gshare(8);
    a.update_branch(0x100, Taken);
    b.update_branch(0x100, NotTaken);
    assert_ne!(a.index(0x40), b.index(0x40));
}

/// Repeated lookups never mutate state.
#[test]
fn gshare_predict_is_idempotent() {
    let mut bp = gshare(6);
    for (i, pc) in [0x10u32, 0x24, 0x10, 0x3C].into_iter().enumerate() {
        bp.update_branch(pc, Direction::from(i % 2 == 0));
    }
    let snapshot = bp.clone();
    let first = bp.predict_branch(0x24);
    for _ in 0..10 {
        assert_eq!(bp.predict_branch(0x24), first);
    }
    assert_eq!(bp, snapshot);
}

//! # Tournament Predictor Tests
//!
//! Verifies the chooser encoding (2,3 = local), training of the chooser from
//! pre-update component predictions, and that component tables are indexed with
//! pre-update histories.

use bpsim_core::Direction::{self, NotTaken, Taken};
use bpsim_core::bru::BranchPredictor;
use bpsim_core::bru::tournament::TournamentPredictor;
use bpsim_core::config::TournamentConfig;

/// Period-three pattern T, T, N.
fn period_three(step: usize) -> Direction {
    Direction::from(step % 3 != 2)
}

/// One global history bit, two local history bits.
///
/// With a single branch, the global entry for "previous outcome was taken" sees
/// T, N, T, N, ... and is always wrong, while two bits of local history fully
/// determine the pattern.
fn local_favoured() -> TournamentPredictor {
    TournamentPredictor::new(&TournamentConfig {
        global_history_bits: 1,
        chooser_bits: 1,
        local_history_bits: 2,
        local_table_bits: 2,
    })
}

/// Chooser starts at 2 (local), local counters start weakly not-taken.
#[test]
fn tournament_initial_not_taken() {
    let bp = TournamentPredictor::new(&TournamentConfig::default());
    assert_eq!(bp.chooser_state(), 2);
    assert_eq!(bp.predict_branch(0x1000), NotTaken);
    assert_eq!(bp.predict_local(0x1000), NotTaken);
    assert_eq!(bp.predict_global(0x1000), NotTaken);
}

/// Local right and global wrong drives the chooser to its maximum and pins
/// predictions to the local component.
#[test]
fn tournament_chooser_saturates_toward_local() {
    let mut bp = local_favoured();
    let pc = 0;

    // Warm up, stopping right after a taken outcome so the GHR is 1.
    for step in 0..31 {
        bp.update_branch(pc, period_three(step));
    }
    assert_eq!(bp.history(), 1);
    assert_eq!(bp.chooser_state(), 3);

    for step in 31..61 {
        let outcome = period_three(step);
        let prediction = bp.predict_branch(pc);
        assert_eq!(prediction, outcome, "step {step}");
        if bp.history() == 1 {
            assert_eq!(bp.chooser_state(), 3, "step {step}");
            assert_eq!(prediction, bp.predict_local(pc));
            assert_ne!(bp.predict_global(pc), outcome);
        }
        bp.update_branch(pc, outcome);
    }
}

/// The chooser moves only when the components disagree on correctness.
#[test]
fn tournament_chooser_moves_toward_global() {
    let mut bp = local_favoured();
    // Step 0: both predict not-taken, outcome taken: no chooser change.
    bp.update_branch(0, Taken);
    assert_eq!(bp.history(), 1);
    assert_eq!(bp.chooser_state(), 2);

    // Step 1 (GHR=1): local index 0b01 is fresh (N), global index 1 is fresh (N).
    // Outcome not-taken: both right, no change.
    bp.update_branch(0, NotTaken);
    assert_eq!(bp.history(), 0);

    // Step 2 (GHR=0): global entry 0 was trained taken on step 0, local index
    // 0b10 is fresh. Outcome taken: global right, local wrong.
    assert_eq!(bp.predict_global(0), Taken);
    assert_eq!(bp.predict_local(0), NotTaken);
    assert_eq!(bp.chooser_state(), 2);
    assert_eq!(bp.predict_branch(0), NotTaken);
    bp.update_branch(0, Taken);

    // GHR is 1 again; entry 0 of the chooser now holds 1 (global).
    bp.update_branch(0, NotTaken);
    assert_eq!(bp.history(), 0);
    assert_eq!(bp.chooser_state(), 1);
    assert_eq!(bp.predict_branch(0), bp.predict_global(0));
}

/// Tournament learns taken after training.
#[test]
fn tournament_learns_taken() {
    let mut bp = TournamentPredictor::new(&TournamentConfig::default());
    let pc = 0x1000;
    for _ in 0..20 {
        bp.update_branch(pc, Taken);
    }
    assert_eq!(bp.predict_branch(pc), Taken);
}

/// Tournament learns not-taken.
#[test]
fn tournament_learns_not_taken() {
    let mut bp = TournamentPredictor::new(&TournamentConfig::default());
    let pc = 0x1000;
    for _ in 0..10 {
        bp.update_branch(pc, Taken);
    }
    for _ in 0..30 {
        bp.update_branch(pc, NotTaken);
    }
    assert_eq!(bp.predict_branch(pc), NotTaken);
}

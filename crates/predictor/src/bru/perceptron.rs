//! Perceptron Branch Predictor.
//!
//! Uses a single-layer perceptron to predict branch direction. Instead of
//! saturating counters, it keeps one weight vector per address bucket. The
//! prediction is the sign of the dot product of the weights with the recent
//! global outcomes, encoded as +1 (taken) and -1 (not taken).
//!
//! Training follows the thresholded perceptron rule: weights move on a
//! misprediction *and* whenever the output magnitude is below the threshold, so
//! buckets with a near-zero margin keep learning while they are still correct.

use std::collections::VecDeque;

use tracing::debug;

use super::BranchPredictor;
use crate::common::Direction;
use crate::config::PerceptronConfig;

/// Initial value of every bias weight.
const INITIAL_BIAS: i16 = 1;

/// Global outcome history encoded as perceptron inputs.
///
/// Element 0 is the most recent outcome. Unlike the bit-packed
/// [`GlobalHistory`](super::history::GlobalHistory), this register stores signs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignHistory {
    /// Input signs, most recent first.
    signs: VecDeque<i8>,
    /// Fixed length.
    len: usize,
}

impl SignHistory {
    /// Creates a history of `len` not-taken (-1) inputs.
    pub fn new(len: usize) -> Self {
        Self {
            signs: VecDeque::from(vec![-1; len]),
            len,
        }
    }

    /// Pushes `outcome` to the front and drops the oldest input.
    pub fn push(&mut self, outcome: Direction) {
        self.signs.push_front(outcome.sign() as i8);
        self.signs.truncate(self.len);
    }

    /// Iterates over the inputs, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.signs.iter().map(|&s| i32::from(s))
    }

    /// Number of inputs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for a zero-length history.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Perceptron Predictor structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerceptronPredictor {
    /// Global history as perceptron inputs.
    history: SignHistory,
    /// Table of weights (flattened). Each row is `[bias, w1, .., wN]`.
    table: Vec<i16>,
    /// Mask for selecting a row from the branch address.
    table_mask: usize,
    /// Size of a single row in the table (history length + bias).
    row_size: usize,
    /// Training threshold (theta).
    threshold: i32,
}

impl PerceptronPredictor {
    /// Creates a new Perceptron Predictor based on configuration.
    ///
    /// Every bias starts at 1 and every history weight at 0.
    pub fn new(config: &PerceptronConfig) -> Self {
        let table_entries = 1usize << config.table_bits;
        let row_size = config.history_length + 1;

        let mut table = vec![0; table_entries * row_size];
        for row in table.chunks_exact_mut(row_size) {
            row[0] = INITIAL_BIAS;
        }

        debug!(
            perceptrons = table_entries,
            history_length = config.history_length,
            threshold = config.threshold,
            "perceptron tables allocated"
        );

        Self {
            history: SignHistory::new(config.history_length),
            table,
            table_mask: table_entries - 1,
            row_size,
            threshold: config.threshold,
        }
    }

    /// Row index of the perceptron for the branch at `pc`.
    #[inline(always)]
    fn bucket(&self, pc: u32) -> usize {
        (pc as usize) & self.table_mask
    }

    /// Weight row of the perceptron for the branch at `pc`, bias first.
    pub fn weights(&self, pc: u32) -> &[i16] {
        let base = self.bucket(pc) * self.row_size;
        &self.table[base..base + self.row_size]
    }

    /// Computes the perceptron output (dot product) for the branch at `pc`.
    ///
    /// Sums the bias weight and the product of history inputs and weights.
    pub fn output(&self, pc: u32) -> i32 {
        let row = self.weights(pc);
        let dot: i32 = row[1..]
            .iter()
            .zip(self.history.iter())
            .map(|(&w, x)| i32::from(w) * x)
            .sum();
        i32::from(row[0]) + dot
    }

    /// Training threshold.
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// Current history inputs, most recent first.
    pub fn history(&self) -> &SignHistory {
        &self.history
    }
}

/// Clamps a weight value to the 16-bit signed integer range.
fn clamp_weight(v: i32) -> i16 {
    v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

impl BranchPredictor for PerceptronPredictor {
    /// Predicts taken if the perceptron output is strictly positive.
    fn predict_branch(&self, pc: u32) -> Direction {
        Direction::from(self.output(pc) > 0)
    }

    /// Trains the weights on a misprediction or a low-confidence output, then
    /// shifts the outcome into the history regardless.
    fn update_branch(&mut self, pc: u32, outcome: Direction) {
        let y = self.output(pc);
        let predicted = Direction::from(y > 0);
        let t = outcome.sign();

        if predicted != outcome || y.abs() < self.threshold {
            let base = self.bucket(pc) * self.row_size;
            let row = &mut self.table[base..base + self.row_size];

            row[0] = clamp_weight(i32::from(row[0]) + t);
            for (w, x) in row[1..].iter_mut().zip(self.history.iter()) {
                *w = clamp_weight(i32::from(*w) + t * x);
            }
        }

        self.history.push(outcome);
    }
}

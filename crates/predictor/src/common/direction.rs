//! Branch Direction.
//!
//! This module defines the resolved (or predicted) direction of a conditional branch.
//! The direction is used for the following:
//! 1. **Prediction Output:** Every predictor answers a lookup with a `Direction`.
//! 2. **Training Input:** The resolved outcome drives counter and weight updates.
//! 3. **History Encoding:** Outcomes are shifted into history registers as bits (1/0)
//!    or as perceptron input signs (+1/-1).

use std::fmt;
use std::ops::Not;

/// Direction of a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The branch falls through to the next sequential instruction.
    #[default]
    NotTaken,
    /// The branch redirects control flow to its target.
    Taken,
}

impl Direction {
    /// Returns `true` if the direction is [`Direction::Taken`].
    #[inline(always)]
    pub fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }

    /// Encodes the direction as a history bit (1 = taken, 0 = not taken).
    #[inline(always)]
    pub fn bit(self) -> u64 {
        u64::from(self.is_taken())
    }

    /// Encodes the direction as a perceptron input (+1 = taken, -1 = not taken).
    #[inline(always)]
    pub fn sign(self) -> i32 {
        if self.is_taken() { 1 } else { -1 }
    }
}

impl From<bool> for Direction {
    #[inline(always)]
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Direction> for bool {
    #[inline(always)]
    fn from(dir: Direction) -> Self {
        dir.is_taken()
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Taken => Self::NotTaken,
            Self::NotTaken => Self::Taken,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "T"),
            Self::NotTaken => write!(f, "N"),
        }
    }
}

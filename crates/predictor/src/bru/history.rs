//! Branch History Registers.
//!
//! This module provides the bit-packed history state shared by the table-based
//! predictors:
//! 1. **Global History:** One shift register of recent outcomes across all branches.
//! 2. **Local History:** A table of per-address shift registers, indexed by the low
//!    bits of the branch address.
//!
//! Each outcome enters at bit 0 (1 = taken) and every register is masked to its
//! configured width on every shift.

use crate::common::Direction;

/// Returns a mask covering the low `width` bits.
#[inline(always)]
fn low_mask(width: usize) -> u64 {
    if width >= u64::BITS as usize {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Global History Register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalHistory {
    /// Outcome bits, most recent in bit 0.
    bits: u64,
    /// Width mask.
    mask: u64,
    /// Width in bits.
    width: usize,
}

impl GlobalHistory {
    /// Creates an all-zero register `width` bits wide.
    pub fn new(width: usize) -> Self {
        Self {
            bits: 0,
            mask: low_mask(width),
            width,
        }
    }

    /// Current register value.
    #[inline(always)]
    pub fn value(&self) -> u64 {
        self.bits
    }

    /// Register width in bits.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Low bits of the register selected by a table `mask`.
    #[inline(always)]
    pub fn index(&self, mask: usize) -> usize {
        (self.bits as usize) & mask
    }

    /// Shifts `outcome` into bit 0.
    #[inline(always)]
    pub fn push(&mut self, outcome: Direction) {
        self.bits = ((self.bits << 1) | outcome.bit()) & self.mask;
    }
}

/// Per-address local history table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalHistoryTable {
    /// One history pattern per tracked branch.
    patterns: Vec<u64>,
    /// Mask selecting the table entry from the branch address.
    table_mask: usize,
    /// Mask applied to each pattern.
    pattern_mask: u64,
}

impl LocalHistoryTable {
    /// Creates `2^table_bits` all-zero patterns, each `history_bits` wide.
    pub fn new(table_bits: usize, history_bits: usize) -> Self {
        let size = 1usize << table_bits;
        Self {
            patterns: vec![0; size],
            table_mask: size - 1,
            pattern_mask: low_mask(history_bits),
        }
    }

    /// Table slot tracking the branch at `pc`.
    #[inline(always)]
    pub fn slot(&self, pc: u32) -> usize {
        (pc as usize) & self.table_mask
    }

    /// History pattern of the branch at `pc`.
    #[inline(always)]
    pub fn pattern(&self, pc: u32) -> usize {
        self.patterns[self.slot(pc)] as usize
    }

    /// Shifts `outcome` into the history of the branch at `pc`.
    #[inline(always)]
    pub fn push(&mut self, pc: u32, outcome: Direction) {
        let slot = self.slot(pc);
        let pattern = &mut self.patterns[slot];
        *pattern = ((*pattern << 1) | outcome.bit()) & self.pattern_mask;
    }

    /// Number of tracked branches.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false`; the table has at least one entry.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

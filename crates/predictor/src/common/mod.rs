//! Common types shared by every predictor and by the driver.
//!
//! This module provides:
//! 1. **Directions:** The taken/not-taken outcome and its history encodings.
//! 2. **Branch Descriptors:** The resolved branch record handed to `train`.
//! 3. **Error Handling:** Configuration errors raised at initialization.

/// Branch descriptor and classification.
pub mod branch;

/// Taken/not-taken direction.
pub mod direction;

/// Configuration error types.
pub mod error;

pub use branch::{Branch, BranchKind};
pub use direction::Direction;
pub use error::ConfigError;

//! # Unit Components
//!
//! Organises the fine-grained tests for every module of the predictor core.

/// Counters, histories, choosers and every predictor.
pub mod bru;

/// Directions, branch descriptors and configuration errors.
pub mod common;

/// Configuration defaults, deserialization and validation.
pub mod config;

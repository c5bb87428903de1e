//! Unit tests for shared types.


/// Direction encodings.
pub mod direction;

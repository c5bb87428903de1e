//! Unit tests for the branch prediction unit.
//!
//! Primitives are tested first (counters, histories, choosers), then each
//! predictor against hand-traced update sequences.




/// Gshare indexing and history walk.
pub mod gshare;





/// Tournament chooser and component ordering.
pub mod tournament;

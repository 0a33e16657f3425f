//! Deterministic sequence generation
//!
//! Implements the benchmark's 64-bit linear-congruential sequence and its
//! derived draw operators.
//! CRITICAL: All randomness in the generator MUST go through this module.

mod lcg;

pub use lcg::{Sequence, SEQUENCE_INCREMENT, SEQUENCE_MULTIPLIER};

//! Random number generation module
//!
//! Deterministic index generation for the Balloon construction. The
//! generator here is not a source of secret randomness: its output is a
//! pure function of a seed and of how many draws have been taken, which is
//! what keeps a key derivation reproducible.

mod index;

/// Seeded generator of block indices.
pub use index::{IndexRng, RngError};

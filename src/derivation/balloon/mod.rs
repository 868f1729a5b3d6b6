//! Balloon hashing (Boneh, Corrigan-Gibbs, Schechter, 2016).
//!
//! Balloon is a sequential memory-hard key-derivation function. Filling
//! and mixing a buffer of `space_cost` bytes `time_cost` times forces an
//! attacker to either hold the whole buffer or recompute large parts of it
//! for every guess.
//!
//! # Algorithm Overview
//!
//! 1. **Seed**: `seed = hex(H(password, salt, space_cost, time_cost))`.
//! 2. **Initialization**: block `i` is `H(seed | i, block[i - 1])`.
//! 3. **Mixing**: `time_cost` passes. Each block is replaced by
//!    `H(round, i, block[i], block[i - 1], DELTA random blocks)` where the
//!    random indices come from a generator seeded with `seed`.
//! 4. **Output**: the last block.
//!
//! Every step depends on the one before it, within a pass and across
//! passes. The implementation is strictly sequential; independent
//! derivations can run concurrently because each owns all of its state.
//!
//! # Hash Encoding
//!
//! All hashing goes through [`crate::hash::HashOracle`], which joins its
//! inputs with `|` and hex-encodes raw bytes before hashing the result once.
//! Outputs are therefore specific to that encoding and to the chosen
//! [`crate::hash::Hash512`] backend.

pub(crate) mod boundary;
pub(crate) mod buffer;
pub mod core;
pub(crate) mod mix;
pub mod params;
pub mod worker;

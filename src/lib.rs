//! Balloon hashing, a memory-hard password-based key derivation function
//!
//! This crate derives a 64-byte key from a password and a salt while
//! forcing whoever computes it to hold a configurable amount of memory
//! (`space_cost`) for a configurable number of passes (`time_cost`).
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! derivation is a pure function of its four inputs: no global state, no
//! external entropy, no I/O.
//!
//! # Module overview
//!
//! - `hash`
//!   The 512-bit hash primitives (an in-house SHA-512 and a Keccak-512
//!   backend) and the delimiter-joining hash oracle that every part of the
//!   construction absorbs its inputs through.
//!
//! - `rng`
//!   The deterministic index generator that chooses which blocks get mixed
//!   together. It is seeded per derivation and never shared.
//!
//! - `derivation`
//!   The Balloon construction itself: parameters and validation, buffer
//!   initialization, mixing rounds, key extraction, and a helper for
//!   running a derivation on a background thread.
//!
//! # Example
//!
//! ```rust
//! use ::balloon::derivation::{BalloonParams, balloon};
//!
//! let key = balloon("correct horse", "battery staple", &BalloonParams::default()).unwrap();
//! assert_eq!(key.len(), 64);
//! ```
//!
//! # Design goals
//!
//! - Sequential, in-place mixing exactly as the construction describes
//! - Owned per-derivation state, safe to run many derivations in parallel
//! - Secrets and working memory wiped on drop
//! - Parameter floors enforced before any work starts
//!
//! Progress is reported through `tracing` at debug and trace level. The
//! password is never logged.

pub mod derivation;
pub mod hash;
pub mod rng;

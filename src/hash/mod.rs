//! Hash algorithms exposed by the crate.
//!
//! Includes a pure-Rust SHA-512, a Keccak-512 backend built on the `sha3`
//! crate, and the absorb-then-finalize oracle the Balloon construction is
//! written against.

pub mod keccak;
pub mod oracle;
pub mod sha512;

pub use keccak::Keccak512;
pub use oracle::{Absorb, Hash512, HashOracle, Sha512};

/// Re-export of the SHA-512 convenience function.
pub use sha512::core::sha512;

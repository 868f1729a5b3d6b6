//! Keccak-512 backend.
//!
//! This is the pre-standard Keccak padding (not FIPS 202 SHA3-512), which is
//! what browser deployments of Balloon hashing built on CryptoJS computed.

use sha3::Digest as _;

use super::oracle::Hash512;

/// Keccak-512 using the `sha3` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak512;

impl Hash512 for Keccak512 {
    fn hash512(input: &[u8]) -> [u8; 64] {
        sha3::Keccak512::digest(input).into()
    }
}

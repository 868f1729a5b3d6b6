//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a complete SHA-512 hashing function for arbitrary-length input

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// Input words are interpreted as big-endian, as required by SHA-512.
pub fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Computes the SHA-512 hash of the given input.
///
/// This function processes the input message in 1024-bit blocks, applies
/// the SHA-512 padding rules, and returns the final 512-bit hash value.
///
/// # Notes
/// - Message length is encoded as a 128-bit big-endian integer (in bits).
/// - The internal state uses 8 × 64-bit words and is serialized in big-endian.
/// - No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut state = H512_INIT;

    let mut chunks = input.chunks_exact(128);
    let mut block = [0u8; 128];

    for chunk in chunks.by_ref() {
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    // Copy remaining bytes and append the padding bit (0x80)
    let rem = chunks.remainder();
    block = [0u8; 128];
    block[..rem.len()].copy_from_slice(rem);
    block[rem.len()] = 0x80;

    // Not enough room for the 128-bit length field: flush and continue
    // in a fresh zeroed block.
    if rem.len() > 111 {
        compress(&block, &mut state);
        block = [0u8; 128];
    }

    let bit_len = (input.len() as u128) << 3;
    block[112..128].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

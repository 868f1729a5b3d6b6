//! Initialization and finalization for Balloon hashing.
//!
//! This module handles the boundary operations of the construction:
//! hashing the inputs into the per-derivation seed, expanding that seed
//! into the initial buffer, and extracting the derived key.

use zeroize::Zeroizing;

use super::buffer::Buffer;
use super::params::{BLOCK_SIZE, BalloonParams};
use crate::hash::oracle::encode_hex;
use crate::hash::{Absorb, Hash512, HashOracle};

/// Computes the hex-encoded parameter digest.
///
/// ```text
/// seed = hex(H("|" + password + "|" + salt + "|" + space_cost + "|" + time_cost))
/// ```
///
/// The same string prefixes every initial block and seeds the index
/// generator, so the whole derivation is bound to all four inputs.
pub(crate) fn seed<H: Hash512>(
    password: Absorb<'_>,
    salt: Absorb<'_>,
    params: &BalloonParams,
) -> Zeroizing<String> {
    let mut oracle = HashOracle::<H>::new();
    oracle
        .update(password)
        .update(salt)
        .update_decimal(params.space_cost)
        .update_decimal(u64::from(params.time_cost));

    let digest = Zeroizing::new(oracle.digest());
    encode_hex(digest.as_slice())
}

/// Fills the buffer from the seed.
///
/// Block `i` is `H(seed + "|" + i)` for the first block and
/// `H(seed + "|" + i, block[i - 1])` afterwards, so no block can be
/// produced without all of the blocks before it.
pub(crate) fn buffer_init<H: Hash512>(buffer: &mut Buffer, seed: &str) {
    for i in 0..buffer.n_blocks() {
        let mut oracle = HashOracle::<H>::with_capacity(seed.len() + 2 * BLOCK_SIZE + 24);

        let prefix = block_prefix(seed, i);
        oracle.update(prefix.as_str());

        if i > 0 {
            oracle.update(buffer.block(i - 1));
        }

        let digest = Zeroizing::new(oracle.digest());
        buffer.set_block(i, &digest);
    }
}

/// Builds `seed + "|" + i` in a buffer sized up front, so the seed is never
/// left behind in a reallocated copy.
fn block_prefix(seed: &str, i: usize) -> Zeroizing<String> {
    let index = i.to_string();

    let mut prefix = Zeroizing::new(String::with_capacity(seed.len() + 1 + index.len()));
    prefix.push_str(seed);
    prefix.push('|');
    prefix.push_str(&index);
    prefix
}

/// Extracts the derived key: the last block of the mixed buffer.
pub(crate) fn finalize(buffer: &Buffer) -> Zeroizing<[u8; BLOCK_SIZE]> {
    buffer.last_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{Sha512, sha512};

    #[test]
    fn seed_is_hex_of_delimited_inputs() {
        let params = BalloonParams::new(16384, 3);
        let seed = seed::<Sha512>("password".into(), "salt".into(), &params);

        let digest = sha512(b"|password|salt|16384|3");
        assert_eq!(seed.as_str(), encode_hex(&digest).as_str());
    }

    #[test]
    fn byte_passwords_are_absorbed_as_hex() {
        let params = BalloonParams::new(16384, 3);
        let from_bytes = seed::<Sha512>((&[0xbe_u8, 0xef]).into(), "salt".into(), &params);
        let from_text = seed::<Sha512>("beef".into(), "salt".into(), &params);

        assert_eq!(from_bytes.as_str(), from_text.as_str());
    }

    #[test]
    fn init_chains_each_block_to_the_previous_one() {
        let mut buffer = Buffer::zeroed(3).unwrap();
        buffer_init::<Sha512>(&mut buffer, "abc");

        assert_eq!(buffer.block(0), sha512(b"|abc|0").as_slice());

        let mut second = b"|abc|1|".to_vec();
        crate::hash::oracle::push_hex(&mut second, buffer.block(0));
        assert_eq!(buffer.block(1), sha512(&second).as_slice());
    }

    #[test]
    fn block_prefix_fits_its_initial_allocation() {
        let seed = "f00d";
        let prefix = block_prefix(seed, usize::MAX);
        let expected = format!("{seed}|{}", usize::MAX);

        assert_eq!(prefix.as_str(), expected);
        assert_eq!(
            prefix.capacity(),
            String::with_capacity(expected.len()).capacity()
        );
    }

    #[test]
    fn finalize_returns_last_block() {
        let mut buffer = Buffer::zeroed(2).unwrap();
        buffer_init::<Sha512>(&mut buffer, "abc");

        assert_eq!(finalize(&buffer).as_slice(), buffer.block(1));
    }
}

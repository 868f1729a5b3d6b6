//! The Balloon mixing pass.
//!
//! One pass walks the buffer front to back. Block `i` is replaced by the
//! hash of the round number, its index, its current value, the value of its
//! predecessor (the last block for `i == 0`) and `DELTA` blocks chosen by
//! the index generator. The update is written back before `i + 1` is
//! processed, so later blocks see the values already replaced in this pass.

use tracing::trace;
use zeroize::Zeroizing;

use super::buffer::Buffer;
use super::params::{BLOCK_SIZE, DELTA};
use crate::hash::{Hash512, HashOracle};
use crate::rng::{IndexRng, RngError};

/// Encoded size of one absorbed block: delimiter plus at most two hex
/// digits per byte.
const ENCODED_BLOCK: usize = 1 + 2 * BLOCK_SIZE;

/// Room for the round and index fields.
const COUNTERS: usize = 2 * (1 + 20);

/// Runs mixing round `round` over the whole buffer.
///
/// Index draws consume `rng` in block order and, within a block, in the
/// order the blocks are absorbed. Changing that order changes the output.
pub(crate) fn buffer_mix<H: Hash512>(
    buffer: &mut Buffer,
    round: u32,
    rng: &mut IndexRng<H>,
) -> Result<(), RngError> {
    let n_blocks = buffer.n_blocks();

    for i in 0..n_blocks {
        if i % 128 == 0 {
            trace!(round, block = i, n_blocks, "hashing block");
        }

        let prev_idx = if i > 0 { i - 1 } else { n_blocks - 1 };

        let mut oracle = HashOracle::<H>::with_capacity(COUNTERS + (2 + DELTA) * ENCODED_BLOCK);
        oracle
            .update_decimal(u64::from(round))
            .update_decimal(i as u64)
            .update(buffer.block(i))
            .update(buffer.block(prev_idx));

        for _ in 0..DELTA {
            let rand_idx = rng.random_below(n_blocks)?;
            oracle.update(buffer.block(rand_idx));
        }

        let digest = Zeroizing::new(oracle.digest());
        buffer.set_block(i, &digest);
    }

    Ok(())
}

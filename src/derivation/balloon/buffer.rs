//! Working memory for Balloon hashing.
//!
//! The buffer is one contiguous, owned byte vector addressed by block
//! index. Blocks are views into it, never separate allocations, so a block
//! can be read and then overwritten in place within the same pass.

use std::collections::TryReserveError;

use zeroize::Zeroizing;

use super::params::BLOCK_SIZE;

/// Contiguous block storage, wiped on drop.
pub(crate) struct Buffer {
    bytes: Zeroizing<Vec<u8>>,
}

impl Buffer {
    /// Allocates `n_blocks` zeroed blocks.
    ///
    /// The allocation is exact and fallible, so a huge `space_cost` reports
    /// an error instead of aborting the process.
    pub(crate) fn zeroed(n_blocks: usize) -> Result<Self, TryReserveError> {
        let len = n_blocks.saturating_mul(BLOCK_SIZE);

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len)?;
        bytes.resize(len, 0);

        Ok(Self {
            bytes: Zeroizing::new(bytes),
        })
    }

    #[inline]
    pub(crate) fn n_blocks(&self) -> usize {
        self.bytes.len() / BLOCK_SIZE
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn block(&self, idx: usize) -> &[u8] {
        &self.bytes[idx * BLOCK_SIZE..(idx + 1) * BLOCK_SIZE]
    }

    #[inline]
    pub(crate) fn set_block(&mut self, idx: usize, value: &[u8; BLOCK_SIZE]) {
        self.bytes[idx * BLOCK_SIZE..(idx + 1) * BLOCK_SIZE].copy_from_slice(value);
    }

    /// Copies the last block out of the buffer.
    pub(crate) fn last_block(&self) -> Zeroizing<[u8; BLOCK_SIZE]> {
        let mut out = Zeroizing::new([0u8; BLOCK_SIZE]);
        out.copy_from_slice(self.block(self.n_blocks() - 1));
        out
    }
}

//! Parameter definitions and validation for Balloon hashing.
//!
//! This module defines the cost parameters of the construction and the
//! floors below which a derivation refuses to run.

use thiserror::Error;

/// Size of one buffer block in bytes, the output size of the 512-bit hash.
pub const BLOCK_SIZE: usize = 64;

/// Number of pseudo-randomly chosen blocks mixed into every block update.
pub const DELTA: usize = 10;

/// Smallest accepted `space_cost`, in bytes.
pub const MIN_SPACE_COST: u64 = 16 * 1024;

/// Smallest accepted number of mixing rounds.
pub const MIN_TIME_COST: u32 = 3;

/// Largest block count the index generator can address (31 bits).
const MAX_BLOCKS: u64 = (1 << 31) - 1;

/// Cost parameters for a Balloon derivation.
///
/// `space_cost` is a byte count. It is rounded to the nearest whole number
/// of blocks, halves rounding up, so the memory actually used can be up to
/// 32 bytes more or less than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalloonParams {
    /// Memory to fill, in bytes (minimum 16 KiB).
    pub space_cost: u64,
    /// Number of mixing rounds over the buffer (minimum 3).
    pub time_cost: u32,
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalloonParamError {
    #[error("space_cost too small: {space_cost} (must be >= {})", MIN_SPACE_COST)]
    SpaceCostTooSmall { space_cost: u64 },
    #[error("space_cost too large: {space_cost} needs more than {} blocks", MAX_BLOCKS)]
    SpaceCostTooLarge { space_cost: u64 },
    #[error("time_cost too small: {time_cost} (must be >= {})", MIN_TIME_COST)]
    TimeCostTooSmall { time_cost: u32 },
}

impl BalloonParams {
    pub fn new(space_cost: u64, time_cost: u32) -> Self {
        Self {
            space_cost,
            time_cost,
        }
    }

    /// Checks both costs against their floors and the addressable maximum.
    pub fn validate(&self) -> Result<(), BalloonParamError> {
        if self.space_cost < MIN_SPACE_COST {
            return Err(BalloonParamError::SpaceCostTooSmall {
                space_cost: self.space_cost,
            });
        }

        if block_count(self.space_cost) > MAX_BLOCKS {
            return Err(BalloonParamError::SpaceCostTooLarge {
                space_cost: self.space_cost,
            });
        }

        if self.time_cost < MIN_TIME_COST {
            return Err(BalloonParamError::TimeCostTooSmall {
                time_cost: self.time_cost,
            });
        }

        Ok(())
    }

    /// Number of blocks in the buffer.
    ///
    /// Only meaningful for parameters that passed [`BalloonParams::validate`].
    pub fn n_blocks(&self) -> usize {
        usize::try_from(block_count(self.space_cost)).unwrap_or(usize::MAX)
    }

    /// Size of the buffer in bytes, always a multiple of [`BLOCK_SIZE`].
    ///
    /// Saturates at `usize::MAX` when the buffer cannot be addressed on the
    /// current target.
    pub fn buffer_len(&self) -> usize {
        self.n_blocks().saturating_mul(BLOCK_SIZE)
    }
}

/// Rounds `space_cost / BLOCK_SIZE` to the nearest integer, ties up.
fn block_count(space_cost: u64) -> u64 {
    let block = BLOCK_SIZE as u64;
    space_cost / block + u64::from(space_cost % block >= block / 2)
}

impl Default for BalloonParams {
    /// 16 KiB of memory and 3 rounds, the smallest accepted costs.
    fn default() -> Self {
        Self {
            space_cost: MIN_SPACE_COST,
            time_cost: MIN_TIME_COST,
        }
    }
}

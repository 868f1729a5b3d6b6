use thiserror::Error;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::boundary::{buffer_init, finalize, seed};
use super::buffer::Buffer;
use super::mix::buffer_mix;
use super::params::{BLOCK_SIZE, BalloonParamError, BalloonParams};
use crate::hash::{Absorb, Hash512, Sha512};
use crate::rng::{IndexRng, RngError};

/// Errors that can occur during a Balloon derivation.
///
/// All of them are raised before any hashing work starts, except
/// [`BalloonError::Rng`], which valid parameters cannot trigger.
#[derive(Debug, Error)]
pub enum BalloonError {
    /// Invalid parameter values.
    #[error("invalid balloon parameters: {0}")]
    InvalidParams(#[from] BalloonParamError),
    /// The index generator was asked for an unsupported range.
    #[error(transparent)]
    Rng(#[from] RngError),
    /// The working buffer could not be allocated.
    #[error("cannot allocate a {bytes}-byte balloon buffer")]
    Allocation { bytes: usize },
    /// A background derivation thread could not be started.
    #[error("cannot spawn balloon worker thread")]
    Spawn(#[source] std::io::Error),
}

/// Derives a 64-byte key from `password` and `salt` using SHA-512.
///
/// # Arguments
///
/// * `password` - The secret, as text or raw bytes
/// * `salt` - A public salt, as text or raw bytes
/// * `params` - Space and time costs
///
/// # Returns
///
/// The last block of the mixed buffer, or an error if the parameters are
/// rejected.
///
/// # Example
///
/// ```rust
/// use ::balloon::derivation::{BalloonParams, balloon};
///
/// let params = BalloonParams::new(16 * 1024, 3);
/// let key = balloon("password", "salt", &params).unwrap();
/// assert_eq!(key.len(), 64);
/// ```
pub fn balloon<'p, 's>(
    password: impl Into<Absorb<'p>>,
    salt: impl Into<Absorb<'s>>,
    params: &BalloonParams,
) -> Result<Zeroizing<[u8; BLOCK_SIZE]>, BalloonError> {
    balloon_with::<Sha512>(password, salt, params)
}

/// Derives a 64-byte key using the hash backend `H`.
pub fn balloon_with<'p, 's, H: Hash512>(
    password: impl Into<Absorb<'p>>,
    salt: impl Into<Absorb<'s>>,
    params: &BalloonParams,
) -> Result<Zeroizing<[u8; BLOCK_SIZE]>, BalloonError> {
    let buffer = fill::<H>(password.into(), salt.into(), params)?;
    Ok(finalize(&buffer))
}

/// Runs validation, allocation, initialization and every mixing round,
/// returning the mixed buffer.
pub(crate) fn fill<H: Hash512>(
    password: Absorb<'_>,
    salt: Absorb<'_>,
    params: &BalloonParams,
) -> Result<Buffer, BalloonError> {
    if let Err(err) = params.validate() {
        warn!(%err, "refusing to run balloon hashing");
        return Err(err.into());
    }

    debug!(
        ?salt,
        space_cost = params.space_cost,
        time_cost = params.time_cost,
        "balloon hashing invoked"
    );

    let mut buffer = Buffer::zeroed(params.n_blocks()).map_err(|_| BalloonError::Allocation {
        bytes: params.buffer_len(),
    })?;
    debug!(
        n_blocks = buffer.n_blocks(),
        bytes = buffer.len(),
        "allocated balloon buffer"
    );

    let seed = seed::<H>(password, salt, params);
    let mut rng = IndexRng::<H>::new(seed.as_str());

    debug!("initializing buffer");
    buffer_init::<H>(&mut buffer, &seed);

    for round in 0..params.time_cost {
        debug!("mixing round {} of {}", round + 1, params.time_cost);
        buffer_mix(&mut buffer, round, &mut rng)?;
    }

    Ok(buffer)
}

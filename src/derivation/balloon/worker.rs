//! Running a derivation off the calling thread.
//!
//! A derivation takes as long as its costs say and has no checkpoints, so
//! interactive callers usually hand it to a worker and collect the key
//! later. Each worker owns its inputs, its buffer and its index generator;
//! nothing is shared between concurrent derivations.

use std::thread::{self, JoinHandle};

use zeroize::Zeroizing;

use super::core::{BalloonError, balloon};
use super::params::{BLOCK_SIZE, BalloonParams};

type BalloonResult = Result<Zeroizing<[u8; BLOCK_SIZE]>, BalloonError>;

/// Handle to a derivation running on its own thread.
pub struct BalloonHandle {
    inner: JoinHandle<BalloonResult>,
}

impl BalloonHandle {
    /// Returns true once the derivation has finished.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Blocks until the derivation completes and returns its result.
    ///
    /// A panic on the worker thread is resumed on the caller.
    pub fn join(self) -> BalloonResult {
        match self.inner.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

/// Starts a SHA-512 Balloon derivation on a new thread.
pub fn spawn_balloon(
    password: impl Into<String>,
    salt: impl Into<String>,
    params: BalloonParams,
) -> Result<BalloonHandle, BalloonError> {
    let password = Zeroizing::new(password.into());
    let salt = salt.into();

    let inner = thread::Builder::new()
        .name("balloon".into())
        .spawn(move || balloon(password.as_str(), salt.as_str(), &params))
        .map_err(BalloonError::Spawn)?;

    Ok(BalloonHandle { inner })
}

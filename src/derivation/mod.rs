//! Password-based key derivation.

pub mod balloon;

pub use balloon::core::{BalloonError, balloon, balloon_with};
pub use balloon::params::{
    BLOCK_SIZE, BalloonParamError, BalloonParams, DELTA, MIN_SPACE_COST, MIN_TIME_COST,
};
pub use balloon::worker::{BalloonHandle, spawn_balloon};

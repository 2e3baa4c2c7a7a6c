//! Registry error types.

use crate::domain::{TrainNumber, ValidationError};

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A departure with this train number is already registered
    #[error("train number {0} already exists")]
    DuplicateKey(TrainNumber),

    /// No departure with this train number is registered
    #[error("train number {0} does not exist")]
    KeyNotFound(i32),

    /// Another departure already holds the track
    #[error("track {track} is already assigned to train {holder}")]
    TrackTaken { track: u32, holder: TrainNumber },

    /// The departure itself rejected the input
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

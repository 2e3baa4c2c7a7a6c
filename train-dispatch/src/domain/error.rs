//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from registry lookups and from I/O errors in the terminal layer.

use super::ClockTime;

/// Domain-level errors for input validation and chronology.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Hours or minutes fall outside a 24-hour clock face
    #[error("hours must be between 0 and 23, minutes must be between 0 and 59 (got {hours}:{minutes})")]
    InvalidRange { hours: i32, minutes: i32 },

    /// Train numbers are positive
    #[error("train number must be a positive number (got {0})")]
    InvalidTrainNumber(i32),

    /// A required label was empty
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A departure was scheduled before the current time
    #[error("departure time {requested} is before the current time {current}")]
    TimeInPast {
        requested: ClockTime,
        current: ClockTime,
    },

    /// The clock was asked to move backwards
    #[error("time cannot be set before the current time {current} (got {requested})")]
    NotAdvancing {
        requested: ClockTime,
        current: ClockTime,
    },

    /// The clock was asked to move to the time it already shows
    #[error("time is already set to {0}")]
    NoOp(ClockTime),

    /// Tracks are positive
    #[error("track must be a positive number (got {0})")]
    InvalidTrack(i32),
}

//! The dispatch clock.
//!
//! There is no ambient "now": the clock is an ordinary value that callers
//! pass by reference into every operation that compares against the current
//! time. Advancing it is immediately visible to all later validation.

use serde::Deserialize;

use super::{ClockTime, ValidationError};

/// Whether the clock accepts being set to the time it already shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// Every update must move the clock strictly forward.
    #[default]
    Strict,
    /// Setting the current time again is accepted as a no-op.
    AllowUnchanged,
}

/// A time-of-day clock that only moves forward.
///
/// # Examples
///
/// ```
/// use train_dispatch::domain::{Clock, ClockTime};
///
/// let mut clock = Clock::new();
/// assert_eq!(clock.current_time(), ClockTime::MIDNIGHT);
///
/// clock.set_current_time(12, 21).unwrap();
/// assert_eq!(clock.current_time().to_string(), "12:21");
///
/// // The clock never runs backwards
/// assert!(clock.set_current_time(8, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    current: ClockTime,
    policy: AdvancePolicy,
}

impl Clock {
    /// A strict clock starting at 00:00.
    pub fn new() -> Self {
        Self::with_policy(AdvancePolicy::default())
    }

    /// A clock starting at 00:00 with the given advance policy.
    pub fn with_policy(policy: AdvancePolicy) -> Self {
        Self {
            current: ClockTime::MIDNIGHT,
            policy,
        }
    }

    pub fn current_time(&self) -> ClockTime {
        self.current
    }

    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// Move the clock to `hours:minutes`.
    ///
    /// Fails if the time is off the clock face, earlier than the current
    /// time, or (under [`AdvancePolicy::Strict`]) equal to it.
    pub fn set_current_time(&mut self, hours: i32, minutes: i32) -> Result<(), ValidationError> {
        let requested = ClockTime::from_hm(hours, minutes)?;

        if requested < self.current {
            return Err(ValidationError::NotAdvancing {
                requested,
                current: self.current,
            });
        }
        if requested == self.current && self.policy == AdvancePolicy::Strict {
            return Err(ValidationError::NoOp(self.current));
        }

        self.current = requested;
        Ok(())
    }

    /// Rewind to 00:00. Only meant for tests and fixtures.
    pub fn reset(&mut self) {
        self.current = ClockTime::MIDNIGHT;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

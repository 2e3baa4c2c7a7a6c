//! A single scheduled departure.

use super::{Clock, ClockTime, Delay, TrainNumber, ValidationError};

/// A scheduled departure from the station.
///
/// Identity and schedule (train number, scheduled time, line, destination)
/// are fixed at construction. Track and delay are the only fields that
/// change afterwards, and the effective departure time is kept in step with
/// the delay.
///
/// # Examples
///
/// ```
/// use train_dispatch::domain::{Clock, Departure};
///
/// let clock = Clock::new();
/// let mut dep = Departure::new(&clock, 30, 12, 20, "F4", "Bergen").unwrap();
/// assert_eq!(dep.track(), None);
/// assert_eq!(dep.effective_departure_time().to_string(), "12:20");
///
/// dep.set_delay(1, 0).unwrap();
/// assert_eq!(dep.effective_departure_time().to_string(), "13:20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    train_number: TrainNumber,
    scheduled_time: ClockTime,
    line: String,
    destination: String,
    /// `None` until a track is assigned
    track: Option<u32>,
    delay: Delay,
    effective_departure_time: ClockTime,
}

impl Departure {
    /// Create a departure, validated against the clock's current time.
    pub fn new(
        clock: &Clock,
        train_number: i32,
        hours: i32,
        minutes: i32,
        line: &str,
        destination: &str,
    ) -> Result<Self, ValidationError> {
        let train_number = TrainNumber::new(train_number)?;
        let scheduled_time = ClockTime::from_hm(hours, minutes)?;

        let current = clock.current_time();
        if scheduled_time < current {
            return Err(ValidationError::TimeInPast {
                requested: scheduled_time,
                current,
            });
        }

        if line.trim().is_empty() {
            return Err(ValidationError::EmptyField("line"));
        }
        if destination.trim().is_empty() {
            return Err(ValidationError::EmptyField("destination"));
        }

        Ok(Self {
            train_number,
            scheduled_time,
            line: line.to_owned(),
            destination: destination.to_owned(),
            track: None,
            delay: Delay::ZERO,
            effective_departure_time: scheduled_time,
        })
    }

    pub fn train_number(&self) -> TrainNumber {
        self.train_number
    }

    pub fn scheduled_time(&self) -> ClockTime {
        self.scheduled_time
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The assigned track, or `None` while unassigned.
    pub fn track(&self) -> Option<u32> {
        self.track
    }

    pub fn delay(&self) -> Delay {
        self.delay
    }

    /// Scheduled time plus delay.
    pub fn effective_departure_time(&self) -> ClockTime {
        self.effective_departure_time
    }

    pub fn is_delayed(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Assign a track. Only positive track numbers are accepted.
    pub fn set_track(&mut self, track: i32) -> Result<(), ValidationError> {
        if track <= 0 {
            return Err(ValidationError::InvalidTrack(track));
        }
        self.track = Some(track as u32);
        Ok(())
    }

    /// Replace the delay and recompute the effective departure time.
    pub fn set_delay(&mut self, hours: i32, minutes: i32) -> Result<(), ValidationError> {
        let delay = Delay::new(hours, minutes)?;
        self.delay = delay;
        self.effective_departure_time = self.scheduled_time.wrapping_add(delay);
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The effective time always equals scheduled time plus the latest delay
        #[test]
        fn effective_time_tracks_delay(
            h in 0..24i32, m in 0..60i32,
            delays in prop::collection::vec((0..24i32, 0..60i32), 1..5),
        ) {
            let clock = Clock::new();
            let mut dep = Departure::new(&clock, 1, h, m, "L1", "Oslo").unwrap();
            for (dh, dm) in &delays {
                dep.set_delay(*dh, *dm).unwrap();
            }
            let (dh, dm) = delays[delays.len() - 1];
            let expected = dep.scheduled_time().wrapping_add(Delay::new(dh, dm).unwrap());
            prop_assert_eq!(dep.effective_departure_time(), expected);
        }

        /// Positive tracks are always accepted
        #[test]
        fn positive_tracks_accepted(track in 1..=i32::MAX) {
            let clock = Clock::new();
            let mut dep = Departure::new(&clock, 1, 8, 0, "L1", "Oslo").unwrap();
            prop_assert!(dep.set_track(track).is_ok());
            prop_assert_eq!(dep.track(), Some(track as u32));
        }
    }
}

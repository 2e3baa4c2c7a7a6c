//! The departure registry.
//!
//! Holds every departure known to the station, keyed by train number. The
//! registry enforces uniqueness of train numbers and of assigned tracks, and
//! answers the queries the departure board needs.
//!
//! Lookups that find nothing return an empty result rather than an error:
//! only operations that must act on a departure (`assign_track`,
//! `assign_delay`) report [`RegistryError::KeyNotFound`].

mod error;

pub use error::RegistryError;

use crate::domain::{Clock, Departure, ValidationError};

/// In-memory collection of departures, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    departures: Vec<Departure>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Iterate over departures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Departure> {
        self.departures.iter()
    }

    /// Register a new departure.
    ///
    /// Fails with [`RegistryError::DuplicateKey`] if the train number is
    /// taken, or with the departure's own validation error.
    pub fn add(
        &mut self,
        clock: &Clock,
        train_number: i32,
        hours: i32,
        minutes: i32,
        line: &str,
        destination: &str,
    ) -> Result<(), RegistryError> {
        if let Some(existing) = self.find(train_number) {
            return Err(RegistryError::DuplicateKey(existing.train_number()));
        }
        let departure = Departure::new(clock, train_number, hours, minutes, line, destination)?;
        self.departures.push(departure);
        Ok(())
    }

    /// Look up a departure by train number.
    pub fn find(&self, train_number: i32) -> Option<&Departure> {
        self.departures
            .iter()
            .find(|d| d.train_number() == train_number)
    }

    /// All departures heading to `destination`, in registry order.
    ///
    /// An empty destination is rejected; no matches is an empty `Vec`.
    pub fn find_by_destination(
        &self,
        destination: &str,
    ) -> Result<Vec<&Departure>, ValidationError> {
        if destination.trim().is_empty() {
            return Err(ValidationError::EmptyField("destination"));
        }
        Ok(self
            .departures
            .iter()
            .filter(|d| d.destination() == destination)
            .collect())
    }

    /// Drop every departure scheduled before the clock's current time.
    ///
    /// Compares the *scheduled* time, so a delayed train whose scheduled slot
    /// has passed is removed even if its effective departure is still ahead.
    /// Returns how many departures were removed.
    pub fn remove_elapsed(&mut self, clock: &Clock) -> usize {
        let now = clock.current_time();
        let before = self.departures.len();
        self.departures.retain(|d| d.scheduled_time() >= now);
        before - self.departures.len()
    }

    /// All departures ordered by scheduled time.
    ///
    /// Departures sharing a scheduled time keep their insertion order.
    pub fn list_sorted(&self) -> Vec<&Departure> {
        let mut sorted: Vec<&Departure> = self.departures.iter().collect();
        sorted.sort_by_key(|d| d.scheduled_time());
        sorted
    }

    /// Assign a track to a departure.
    ///
    /// Fails if the train number is unknown, if another departure already
    /// holds the track, or if the track is not a positive number.
    pub fn assign_track(&mut self, train_number: i32, track: i32) -> Result<(), RegistryError> {
        let index = self.position(train_number)?;

        if let Ok(wanted) = u32::try_from(track) {
            let holder = self
                .departures
                .iter()
                .enumerate()
                .find(|(i, d)| *i != index && d.track() == Some(wanted))
                .map(|(_, d)| d.train_number());
            if let Some(holder) = holder {
                return Err(RegistryError::TrackTaken {
                    track: wanted,
                    holder,
                });
            }
        }

        self.departures[index].set_track(track)?;
        Ok(())
    }

    /// Set the delay of a departure.
    pub fn assign_delay(
        &mut self,
        train_number: i32,
        hours: i32,
        minutes: i32,
    ) -> Result<(), RegistryError> {
        let index = self.position(train_number)?;
        self.departures[index].set_delay(hours, minutes)?;
        Ok(())
    }

    fn position(&self, train_number: i32) -> Result<usize, RegistryError> {
        self.departures
            .iter()
            .position(|d| d.train_number() == train_number)
            .ok_or(RegistryError::KeyNotFound(train_number))
    }
}

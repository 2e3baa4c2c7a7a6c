//! Time-of-day handling for the departure board.
//!
//! The dispatch system models a single day: times are hours and minutes with
//! no date attached. Adding a delay that runs past midnight wraps around to
//! the early hours, as a station clock would.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

use super::ValidationError;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Checks that `hours` and `minutes` lie on a 24-hour clock face.
fn check_range(hours: i32, minutes: i32) -> Result<(u32, u32), ValidationError> {
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(ValidationError::InvalidRange { hours, minutes });
    }
    Ok((hours as u32, minutes as u32))
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use train_dispatch::domain::ClockTime;
///
/// let t = ClockTime::from_hm(14, 30).unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// assert!(ClockTime::from_hm(24, 0).is_err());
/// assert!(ClockTime::from_hm(12, 60).is_err());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// 00:00, the start of the day.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// Create a time from hours (0-23) and minutes (0-59).
    pub fn from_hm(hours: i32, minutes: i32) -> Result<Self, ValidationError> {
        let (h, m) = check_range(hours, minutes)?;
        NaiveTime::from_hms_opt(h, m, 0)
            .map(Self)
            .ok_or(ValidationError::InvalidRange { hours, minutes })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_dispatch::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hour, minute) = parse_hhmm_parts(s)?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Add a delay, wrapping around midnight.
    ///
    /// ```
    /// use train_dispatch::domain::{ClockTime, Delay};
    ///
    /// let late = ClockTime::from_hm(23, 30).unwrap();
    /// let delay = Delay::new(1, 0).unwrap();
    /// assert_eq!(late.wrapping_add(delay).to_string(), "00:30");
    /// ```
    pub fn wrapping_add(&self, delay: Delay) -> Self {
        let (time, _) = self.0.overflowing_add_signed(delay.as_duration());
        Self(time)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// How late a departure is running, in hours and minutes.
///
/// Delays share the bounds of a clock face: up to 23 hours and 59 minutes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay {
    hours: u32,
    minutes: u32,
}

impl Delay {
    /// No delay.
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Create a delay of `hours` (0-23) and `minutes` (0-59).
    pub fn new(hours: i32, minutes: i32) -> Result<Self, ValidationError> {
        let (hours, minutes) = check_range(hours, minutes)?;
        Ok(Self { hours, minutes })
    }

    /// Parse a delay from "HH:MM" format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = parse_hhmm_parts(s)?;
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    /// Returns the delay as a chrono Duration.
    pub fn as_duration(&self) -> Duration {
        Duration::hours(i64::from(self.hours)) + Duration::minutes(i64::from(self.minutes))
    }
}

impl fmt::Debug for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Delay({:02}:{:02})", self.hours, self.minutes)
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Split "HH:MM" into hour and minute values on a 24-hour clock face.
fn parse_hhmm_parts(s: &str) -> Result<(u32, u32), TimeError> {
    let (hh, mm) = s
        .split_once(':')
        .ok_or_else(|| TimeError::new("expected HH:MM format"))?;
    let hours = parse_two_digits(hh).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minutes = parse_two_digits(mm).ok_or_else(|| TimeError::new("invalid minute digits"))?;

    check_range(hours, minutes).map_err(|_| {
        TimeError::new(if hours > 23 {
            "hour must be 0-23"
        } else {
            "minute must be 0-59"
        })
    })
}

/// Exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<i32> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

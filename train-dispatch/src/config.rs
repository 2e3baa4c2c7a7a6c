//! Startup configuration for the dispatch terminal.
//!
//! Configuration is an optional JSON file named by `TRAIN_DISPATCH_CONFIG`.
//! Every field has a default, so an empty object (or no file at all) gives
//! the stock board with five departures.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AdvancePolicy, Clock, ClockTime, Delay, TimeError};
use crate::registry::{Registry, RegistryError};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "TRAIN_DISPATCH_CONFIG";

/// Environment variable that disables ANSI styling when set.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Errors loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed entry carries a malformed "HH:MM" value
    #[error("seed departure {train_number}: {source}")]
    SeedTime {
        train_number: i32,
        source: TimeError,
    },

    /// The registry refused a seed entry
    #[error("seed departure {train_number}: {source}")]
    SeedRejected {
        train_number: i32,
        source: RegistryError,
    },
}

/// A departure registered at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedDeparture {
    pub train_number: i32,

    /// Scheduled time as "HH:MM".
    pub departs: String,

    pub line: String,

    pub destination: String,

    #[serde(default)]
    pub track: Option<i32>,

    /// Delay as "HH:MM".
    #[serde(default)]
    pub delay: Option<String>,
}

impl SeedDeparture {
    pub fn new(train_number: i32, departs: &str, line: &str, destination: &str) -> Self {
        Self {
            train_number,
            departs: departs.to_owned(),
            line: line.to_owned(),
            destination: destination.to_owned(),
            track: None,
            delay: None,
        }
    }

    /// Register this departure, then apply its track and delay if given.
    fn apply(&self, clock: &Clock, registry: &mut Registry) -> Result<(), ConfigError> {
        let time_err = |source| ConfigError::SeedTime {
            train_number: self.train_number,
            source,
        };
        let rejected = |source| ConfigError::SeedRejected {
            train_number: self.train_number,
            source,
        };

        let departs = ClockTime::parse_hhmm(&self.departs).map_err(time_err)?;
        registry
            .add(
                clock,
                self.train_number,
                departs.hour() as i32,
                departs.minute() as i32,
                &self.line,
                &self.destination,
            )
            .map_err(rejected)?;

        if let Some(track) = self.track {
            registry
                .assign_track(self.train_number, track)
                .map_err(rejected)?;
        }
        if let Some(delay) = &self.delay {
            let delay = Delay::parse_hhmm(delay).map_err(time_err)?;
            registry
                .assign_delay(
                    self.train_number,
                    delay.hours() as i32,
                    delay.minutes() as i32,
                )
                .map_err(rejected)?;
        }
        Ok(())
    }
}

/// Configuration for a dispatch session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Whether the clock may be set to the time it already shows.
    pub advance_policy: AdvancePolicy,

    /// Use ANSI styling for headings and delayed times.
    pub color: bool,

    /// Departures registered before the menu opens.
    pub seed: Vec<SeedDeparture>,
}

impl DispatchConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load configuration from the environment.
    ///
    /// Reads the file named by `TRAIN_DISPATCH_CONFIG` if set, otherwise
    /// uses the defaults. A non-empty `NO_COLOR` turns styling off either way.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var_os(key))
    }

    /// [`DispatchConfig::load`] with variables looked up through `var`.
    pub fn load_with(var: impl Fn(&str) -> Option<OsString>) -> Result<Self, ConfigError> {
        let mut config = match var(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => Self::default(),
        };
        if var(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        Ok(config)
    }

    /// A fresh clock following the configured advance policy.
    pub fn clock(&self) -> Clock {
        Clock::with_policy(self.advance_policy)
    }

    /// Register every seed departure, stopping at the first rejection.
    pub fn seed(&self, clock: &Clock, registry: &mut Registry) -> Result<(), ConfigError> {
        for departure in &self.seed {
            departure.apply(clock, registry)?;
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            advance_policy: AdvancePolicy::Strict,
            color: true,
            seed: vec![
                SeedDeparture::new(501, "08:15", "1", "Oslo"),
                SeedDeparture::new(502, "13:45", "1", "Trondheim"),
                SeedDeparture::new(31, "10:20", "14", "Mosjøen"),
                SeedDeparture::new(135, "18:39", "12", "Bodø"),
                SeedDeparture::new(506, "22:42", "1", "Trondheim"),
            ],
        }
    }
}

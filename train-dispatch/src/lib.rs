//! Train dispatch terminal.
//!
//! An in-memory board of the day's departures from a single station,
//! operated from a text menu: register departures, assign tracks, record
//! delays, and advance the station clock.

pub mod config;
pub mod domain;
pub mod registry;
pub mod ui;

//! Domain types for the train dispatch system.
//!
//! This module contains the clock and the departure entity. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod clock;
mod departure;
mod error;
mod time;
mod train_number;

pub use clock::{AdvancePolicy, Clock};
pub use departure::Departure;
pub use error::ValidationError;
pub use time::{ClockTime, Delay, TimeError};
pub use train_number::TrainNumber;

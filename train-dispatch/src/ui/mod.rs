//! Terminal layer for the dispatch system.
//!
//! Reads operator commands, calls the clock and registry, and renders the
//! results as text screens.

mod input;
mod session;
mod style;
pub mod templates;

pub use input::InputError;
pub use session::{MenuChoice, Session, SessionError};
pub use style::Style;

//! Askama templates for the terminal screens.

use askama::Template;

use super::Style;
use crate::domain::{ClockTime, Departure};

/// Visible width of the departure time column.
const DEPARTURE_WIDTH: usize = 16;

// ============================================================================
// Screen Templates
// ============================================================================

/// Start page shown before the menu.
#[derive(Template)]
#[template(path = "splash.txt")]
pub struct SplashTemplate {
    pub style: Style,
    pub version: &'static str,
}

/// Page shown on exit.
#[derive(Template)]
#[template(path = "farewell.txt")]
pub struct FarewellTemplate {
    pub style: Style,
}

/// Page title bar with the current time.
#[derive(Template)]
#[template(path = "header.txt")]
pub struct HeaderTemplate<'a> {
    pub title: &'a str,
    pub now: ClockTime,
    pub style: Style,
}

/// Main menu.
#[derive(Template)]
#[template(path = "menu.txt")]
pub struct MenuTemplate {
    pub title: &'static str,
    pub now: ClockTime,
    pub style: Style,
}

/// Departure table.
#[derive(Template)]
#[template(path = "table.txt")]
pub struct TableTemplate {
    pub rows: Vec<DepartureView>,
    pub style: Style,
}

impl TableTemplate {
    pub fn new<'a>(departures: impl IntoIterator<Item = &'a Departure>, style: Style) -> Self {
        let rows = departures
            .into_iter()
            .map(|d| DepartureView::from_departure(d, style))
            .collect();
        Self { rows, style }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One row of the departure table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureView {
    /// Scheduled time, struck through and followed by the effective time
    /// when delayed. Padded to the column width.
    pub departure: String,
    pub line: String,
    pub number: String,
    pub destination: String,
    /// "+HH:MM", or empty when on time.
    pub delay: String,
    /// Empty while no track is assigned.
    pub track: String,
}

impl DepartureView {
    /// Create from a domain Departure.
    pub fn from_departure(departure: &Departure, style: Style) -> Self {
        let scheduled = departure.scheduled_time().to_string();
        let (departure_cell, delay) = if departure.is_delayed() {
            let cell = format!(
                "{}{}{} {:<width$}",
                style.strike,
                scheduled,
                style.reset,
                departure.effective_departure_time().to_string(),
                width = DEPARTURE_WIDTH - scheduled.len() - 1,
            );
            (cell, format!("+{}", departure.delay()))
        } else {
            (
                format!("{:<width$}", scheduled, width = DEPARTURE_WIDTH),
                String::new(),
            )
        };

        Self {
            departure: departure_cell,
            line: departure.line().to_owned(),
            number: departure.train_number().to_string(),
            destination: departure.destination().to_owned(),
            delay,
            track: departure
                .track()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }
}

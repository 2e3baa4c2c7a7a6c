//! The interactive menu loop.
//!
//! A [`Session`] owns the clock and the registry and talks to the operator
//! through any `BufRead`/`Write` pair. Domain failures are shown to the
//! operator and the form is offered again; only terminal I/O and template
//! failures end the session with an error.

use std::io::{BufRead, Write};

use askama::Template;
use tracing::{debug, info};

use super::input::{InputError, parse_number, parse_number_or_zero};
use super::templates::{
    FarewellTemplate, HeaderTemplate, MenuTemplate, SplashTemplate, TableTemplate,
};
use super::Style;
use crate::domain::{Clock, ValidationError};
use crate::registry::{Registry, RegistryError};

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A screen template failed to render
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

/// Why a form attempt did not succeed.
#[derive(Debug, thiserror::Error)]
enum FormError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operator closed the input mid-form
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<std::io::Error> for FormError {
    fn from(e: std::io::Error) -> Self {
        FormError::Session(e.into())
    }
}

impl From<askama::Error> for FormError {
    fn from(e: askama::Error) -> Self {
        FormError::Session(e.into())
    }
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowTable,
    AddDeparture,
    AssignTrack,
    AssignDelay,
    SearchNumber,
    SearchDestination,
    UpdateTime,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's menu selection ("1" to "8").
    pub fn parse(s: &str) -> Option<Self> {
        let choice = match s.trim() {
            "1" => Self::ShowTable,
            "2" => Self::AddDeparture,
            "3" => Self::AssignTrack,
            "4" => Self::AssignDelay,
            "5" => Self::SearchNumber,
            "6" => Self::SearchDestination,
            "7" => Self::UpdateTime,
            "8" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Whether the session keeps going after a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

type FormAction<R, W> = fn(&mut Session<R, W>) -> Result<String, FormError>;

/// An interactive dispatch session.
pub struct Session<R, W> {
    clock: Clock,
    registry: Registry,
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(clock: Clock, registry: Registry, input: R, output: W, style: Style) -> Self {
        Self {
            clock,
            registry,
            input,
            output,
            style,
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or the input ends.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.render(&SplashTemplate {
            style: self.style,
            version: env!("CARGO_PKG_VERSION"),
        })?;

        if self.read_line()?.is_some() {
            while self.menu()? == Flow::Continue {}
        }

        self.render(&FarewellTemplate { style: self.style })?;
        self.output.flush()?;
        Ok(())
    }

    /// Show the main menu and handle one selection.
    fn menu(&mut self) -> Result<Flow, SessionError> {
        self.render(&MenuTemplate {
            title: "Main menu",
            now: self.clock.current_time(),
            style: self.style,
        })?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Flow::Quit);
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(Flow::Continue);
        };
        debug!(?choice, "menu selection");

        match choice {
            MenuChoice::ShowTable => self.show_table(),
            MenuChoice::AddDeparture => self.form("Add a departure", Self::add_departure),
            MenuChoice::AssignTrack => self.form("Assign track to departure", Self::assign_track),
            MenuChoice::AssignDelay => self.form("Set departure delay", Self::assign_delay),
            MenuChoice::SearchNumber => {
                self.form("Search for departure by number", Self::search_number)
            }
            MenuChoice::SearchDestination => self.form(
                "Search for departure by destination",
                Self::search_destination,
            ),
            MenuChoice::UpdateTime => self.form("Update time", Self::update_time),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn show_table(&mut self) -> Result<Flow, SessionError> {
        self.header("Train Departures")?;
        let table = TableTemplate::new(self.registry.list_sorted(), self.style);
        self.render(&table)?;
        write!(self.output, "\nPress [Enter] to go back")?;
        self.output.flush()?;

        match self.read_line()? {
            Some(_) => Ok(Flow::Continue),
            None => Ok(Flow::Quit),
        }
    }

    /// Run a form until the operator chooses to go back.
    fn form(&mut self, title: &str, action: FormAction<R, W>) -> Result<Flow, SessionError> {
        loop {
            self.header(title)?;
            match action(self) {
                Ok(report) => writeln!(self.output, "{report}")?,
                Err(FormError::Closed) => return Ok(Flow::Quit),
                Err(FormError::Session(e)) => return Err(e),
                Err(e) => {
                    debug!(error = %e, form = title, "form rejected");
                    writeln!(
                        self.output,
                        "\n{}\n{}",
                        self.style.emphasis("Failed for the following reason:"),
                        e
                    )?;
                }
            }

            writeln!(self.output, "\nPress [Enter] to go back or [1] to try again")?;
            write!(self.output, "> ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(again) if again.trim() == "1" => continue,
                Some(_) => return Ok(Flow::Continue),
                None => return Ok(Flow::Quit),
            }
        }
    }

    fn add_departure(&mut self) -> Result<String, FormError> {
        let train_number = parse_number("Train number", &self.prompt("Train number: ")?)?;
        let hours = parse_number("Departure hours", &self.prompt("Departure hours: ")?)?;
        let minutes = parse_number("Departure minutes", &self.prompt("Departure minutes: ")?)?;
        let line = self.prompt("Line: ")?;
        let destination = self.prompt("Destination: ")?;

        self.registry.add(
            &self.clock,
            train_number,
            hours,
            minutes,
            line.trim(),
            destination.trim(),
        )?;
        info!(train = train_number, %destination, "departure added");
        Ok(self.notice("Train departure added."))
    }

    fn assign_track(&mut self) -> Result<String, FormError> {
        let train_number = parse_number("Train number", &self.prompt("Train number: ")?)?;
        let track = parse_number("Track", &self.prompt("Track: ")?)?;

        self.registry.assign_track(train_number, track)?;
        info!(train = train_number, track, "track assigned");
        Ok(self.notice("Track assigned."))
    }

    fn assign_delay(&mut self) -> Result<String, FormError> {
        let train_number = parse_number("Train number", &self.prompt("Train number: ")?)?;
        let hours = parse_number_or_zero("Hours", &self.prompt("Hours: ")?)?;
        let minutes = parse_number("Minutes", &self.prompt("Minutes: ")?)?;

        self.registry.assign_delay(train_number, hours, minutes)?;
        info!(train = train_number, hours, minutes, "delay set");
        Ok(self.notice("Delay added."))
    }

    fn search_number(&mut self) -> Result<String, FormError> {
        let train_number = parse_number("Train number", &self.prompt("Train number: ")?)?;

        match self.registry.find(train_number) {
            Some(departure) => Ok(TableTemplate::new([departure], self.style).render()?),
            None => Ok(format!("No departure with train number {train_number}.")),
        }
    }

    fn search_destination(&mut self) -> Result<String, FormError> {
        let answer = self.prompt("Destination: ")?;
        let destination = answer.trim();

        let matches = self.registry.find_by_destination(destination)?;
        if matches.is_empty() {
            return Ok(format!("No departures to {destination}."));
        }
        Ok(TableTemplate::new(matches, self.style).render()?)
    }

    /// Advance the clock, then purge departures scheduled before it.
    fn update_time(&mut self) -> Result<String, FormError> {
        let hours = parse_number_or_zero("Hours", &self.prompt("Hours: ")?)?;
        let minutes = parse_number("Minutes", &self.prompt("Minutes: ")?)?;

        self.clock.set_current_time(hours, minutes)?;
        let removed = self.registry.remove_elapsed(&self.clock);
        info!(time = %self.clock.current_time(), removed, "clock advanced");

        let mut report = self.notice("Time updated.");
        if removed > 0 {
            report.push_str(&format!("\nRemoved {removed} departed train(s)."));
        }
        Ok(report)
    }

    fn header(&mut self, title: &str) -> Result<(), SessionError> {
        self.render(&HeaderTemplate {
            title,
            now: self.clock.current_time(),
            style: self.style,
        })
    }

    fn notice(&self, message: &str) -> String {
        format!("\n{}", self.style.emphasis(message))
    }

    /// Print a prompt and read the answer.
    fn prompt(&mut self, label: &str) -> Result<String, FormError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(FormError::Closed)
    }

    /// Read one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn render(&mut self, template: &impl Template) -> Result<(), SessionError> {
        let text = template.render()?;
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

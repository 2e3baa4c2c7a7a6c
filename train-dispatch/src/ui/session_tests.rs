//! Tests for the interactive menu, driven by scripted input.

use std::io::Cursor;

use super::*;
use crate::domain::ClockTime;

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Registry with 30 at 12:20 to Bergen, 31 at 12:30 to Oslo, 32 at 12:10 to Bergen.
fn sample_registry(clock: &Clock) -> Registry {
    let mut registry = Registry::new();
    registry.add(clock, 30, 12, 20, "F4", "Bergen").unwrap();
    registry.add(clock, 31, 12, 30, "F5", "Oslo").unwrap();
    registry.add(clock, 32, 12, 10, "F6", "Bergen").unwrap();
    registry
}

fn session_with(registry: Registry, script: &str) -> TestSession {
    Session::new(
        Clock::new(),
        registry,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Style::PLAIN,
    )
}

/// Run a script against the sample registry, returning the session and its output.
fn run_sample(script: &str) -> (Registry, Clock, String) {
    let registry = sample_registry(&Clock::new());
    run(session_with(registry, script))
}

fn run(mut session: TestSession) -> (Registry, Clock, String) {
    session.run().unwrap();
    let registry = session.registry().clone();
    let clock = session.clock().clone();
    let output = String::from_utf8(session.into_output()).unwrap();
    (registry, clock, output)
}

#[test]
fn menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ShowTable));
    assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::UpdateTime));
    assert_eq!(MenuChoice::parse("8"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse("0"), None);
    assert_eq!(MenuChoice::parse("9"), None);
    assert_eq!(MenuChoice::parse(""), None);
}

#[test]
fn exit_from_menu() {
    let (_, _, output) = run(session_with(Registry::new(), "\n8\n"));

    assert!(output.contains("Train Dispatch System v"));
    assert!(output.contains("Main menu"));
    assert!(output.contains("Exiting System..."));
}

#[test]
fn input_closed_at_splash() {
    let (_, _, output) = run(session_with(Registry::new(), ""));

    assert!(!output.contains("Main menu"));
    assert!(output.contains("Exiting System..."));
}

#[test]
fn input_closed_at_menu() {
    let (_, _, output) = run(session_with(Registry::new(), "\n"));
    assert!(output.contains("Main menu"));
    assert!(output.contains("Exiting System..."));
}

#[test]
fn invalid_menu_choice() {
    let (_, _, output) = run(session_with(Registry::new(), "\n9\n8\n"));
    assert!(output.contains("Invalid choice"));
    assert_eq!(output.matches("Main menu").count(), 2);
}

#[test]
fn show_table_sorted() {
    let (_, _, output) = run_sample("\n1\n\n8\n");

    assert!(output.contains("Train Departures"));
    let rows: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("12:"))
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("| 32 "));
    assert!(rows[1].contains("| 30 "));
    assert!(rows[2].contains("| 31 "));
}

#[test]
fn add_departure() {
    let script = "\n2\n40\n14\n05\nR10\nDrammen\n\n8\n";
    let (registry, _, output) = run(session_with(Registry::new(), script));

    assert!(output.contains("Add a departure"));
    assert!(output.contains("Train departure added."));
    let dep = registry.find(40).unwrap();
    assert_eq!(dep.scheduled_time().to_string(), "14:05");
    assert_eq!(dep.line(), "R10");
    assert_eq!(dep.destination(), "Drammen");
}

#[test]
fn add_departure_trims_labels() {
    let script = "\n2\n40\n14\n05\n  R10 \n Drammen\n\n6\nDrammen \n\n8\n";
    let (registry, _, output) = run(session_with(Registry::new(), script));

    let dep = registry.find(40).unwrap();
    assert_eq!(dep.line(), "R10");
    assert_eq!(dep.destination(), "Drammen");
    assert_eq!(registry.find_by_destination("Drammen").unwrap().len(), 1);
    assert!(output.lines().any(|l| l.starts_with("14:05") && l.contains("| Drammen ")));
    assert!(!output.contains("No departures to"));
}

#[test]
fn add_departure_retry_after_failure() {
    let script = "\n2\n-1\n12\n20\nF4\nBergen\n1\n30\n12\n20\nF4\nBergen\n\n8\n";
    let (registry, _, output) = run(session_with(Registry::new(), script));

    assert!(output.contains("Failed for the following reason:"));
    assert!(output.contains("train number must be a positive number (got -1)"));
    assert!(output.contains("Train departure added."));
    assert_eq!(registry.len(), 1);
    assert_eq!(output.matches("Add a departure").count(), 2);
}

#[test]
fn add_departure_duplicate() {
    let script = "\n2\n30\n15\n00\nL1\nOslo\n\n8\n";
    let (registry, _, output) = run_sample(script);

    assert!(output.contains("train number 30 already exists"));
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.find(30).unwrap().destination(), "Bergen");
}

#[test]
fn non_numeric_input_is_reported() {
    let (registry, _, output) = run(session_with(Registry::new(), "\n2\nabc\n\n8\n"));

    assert!(output.contains("Train number must be a whole number (got \"abc\")"));
    // The form stops at the first bad answer
    assert!(!output.contains("Departure hours:"));
    assert!(registry.is_empty());
    assert!(output.contains("Exiting System..."));
}

#[test]
fn assign_track_and_collision() {
    let script = "\n3\n30\n1\n1\n31\n1\n\n8\n";
    let (registry, _, output) = run_sample(script);

    assert!(output.contains("Track assigned."));
    assert!(output.contains("track 1 is already assigned to train 30"));
    assert_eq!(registry.find(30).unwrap().track(), Some(1));
    assert_eq!(registry.find(31).unwrap().track(), None);
}

#[test]
fn assign_track_unknown_train() {
    let (_, _, output) = run_sample("\n3\n99\n1\n\n8\n");
    assert!(output.contains("train number 99 does not exist"));
}

#[test]
fn assign_delay_blank_hours() {
    let (registry, _, output) = run_sample("\n4\n30\n\n15\n\n1\n\n8\n");

    assert!(output.contains("Delay added."));
    let dep = registry.find(30).unwrap();
    assert_eq!(dep.effective_departure_time().to_string(), "12:35");

    // The table strikes the scheduled time and shows the new one
    let row = output
        .lines()
        .find(|l| l.starts_with("12:20 12:35"))
        .unwrap();
    assert!(row.contains("+00:15"));
}

#[test]
fn assign_delay_out_of_range() {
    let (registry, _, output) = run_sample("\n4\n30\n0\n60\n\n8\n");
    assert!(output.contains("minutes must be between 0 and 59"));
    assert!(!registry.find(30).unwrap().is_delayed());
}

#[test]
fn search_by_number() {
    let (_, _, output) = run_sample("\n5\n31\n1\n77\n\n8\n");

    assert!(output.contains("Search for departure by number"));
    assert!(output.lines().any(|l| l.starts_with("12:30") && l.contains("Oslo")));
    assert!(output.contains("No departure with train number 77."));
}

#[test]
fn search_by_destination() {
    let (_, _, output) = run_sample("\n6\nBergen\n1\nTromsø\n1\n\n\n8\n");

    let bergen_rows = output
        .lines()
        .filter(|l| l.contains("| Bergen "))
        .count();
    assert_eq!(bergen_rows, 2);
    assert!(output.contains("No departures to Tromsø."));
    assert!(output.contains("destination cannot be empty"));
}

#[test]
fn update_time_purges_elapsed() {
    let (registry, clock, output) = run_sample("\n7\n12\n21\n\n8\n");

    assert!(output.contains("Time updated."));
    assert!(output.contains("Removed 2 departed train(s)."));
    assert_eq!(clock.current_time(), ClockTime::from_hm(12, 21).unwrap());
    assert_eq!(registry.len(), 1);
    assert!(registry.find(31).is_some());
    assert!(output.contains("Current time: 12:21"));
}

#[test]
fn update_time_purges_delayed_by_schedule() {
    // 30 is delayed to 13:20 but its scheduled 12:20 slot has passed
    let (registry, _, _) = run_sample("\n4\n30\n1\n0\n\n7\n12\n21\n\n8\n");
    assert!(registry.find(30).is_none());
}

#[test]
fn update_time_rejects_rewind_and_same_time() {
    let (_, clock, output) = run_sample("\n7\n10\n0\n1\n9\n0\n1\n10\n0\n\n8\n");

    assert!(output.contains("time cannot be set before the current time 10:00 (got 09:00)"));
    assert!(output.contains("time is already set to 10:00"));
    assert_eq!(clock.current_time().to_string(), "10:00");
}

#[test]
fn update_time_blank_hours() {
    let (_, clock, _) = run_sample("\n7\n\n45\n\n8\n");
    assert_eq!(clock.current_time().to_string(), "00:45");
}

#[test]
fn input_closed_mid_form() {
    let (registry, _, output) = run(session_with(Registry::new(), "\n2\n30\n"));

    assert!(registry.is_empty());
    assert!(output.contains("Exiting System..."));
}

#[test]
fn plain_style_has_no_escapes() {
    let (_, _, output) = run_sample("\n4\n30\n0\n5\n\n1\n\n8\n");
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn ansi_style_strikes_delayed_time() {
    let clock = Clock::new();
    let registry = sample_registry(&clock);
    let session = Session::new(
        clock,
        registry,
        Cursor::new(b"\n4\n30\n0\n5\n\n1\n\n8\n".to_vec()),
        Vec::new(),
        Style::ANSI,
    );
    let (_, _, output) = run(session);
    assert!(output.contains("\u{1b}[9m12:20\u{1b}[0m 12:25"));
}

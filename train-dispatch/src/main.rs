use std::io;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use train_dispatch::config::DispatchConfig;
use train_dispatch::registry::Registry;
use train_dispatch::ui::{Session, Style};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the screens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match DispatchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let clock = config.clock();
    let mut registry = Registry::new();
    if let Err(e) = config.seed(&clock, &mut registry) {
        eprintln!("Failed to seed departures: {e}");
        return ExitCode::FAILURE;
    }
    info!(
        departures = registry.len(),
        policy = ?clock.policy(),
        "registry seeded"
    );

    let mut session = Session::new(
        clock,
        registry,
        io::stdin().lock(),
        io::stdout().lock(),
        Style::new(config.color),
    );
    if let Err(e) = session.run() {
        eprintln!("Session ended with an error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

//! Shared components for CLI commands
//!
//! Common logging setup, input reading, and output helpers used across
//! the command implementations.

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("firewatch_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read a saved payload from disk with path context on failure
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read input {}", path.display()), e))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an optional measurement with its unit, "--" when unknown
pub fn format_measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "--".to_string(),
    }
}

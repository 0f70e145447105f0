//! CLI command implementations for the firewatch processor
//!
//! Each subcommand reads a saved upstream payload, runs it through the
//! matching normalization service, and reports the typed result.

pub mod hotspots;
pub mod institutions;
pub mod shared;
pub mod stations;
pub mod weather;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch parsed CLI arguments to the matching command runner
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Weather(args) => weather::run_weather(args),
        Commands::Hotspots(args) => hotspots::run_hotspots(args),
        Commands::Institutions(args) => institutions::run_institutions(args),
        Commands::Stations(args) => stations::run_stations(args),
    }
}

//! Stations command implementation
//!
//! Reports on the built-in station registry, optionally filtered by a
//! name pattern.

use colored::*;

use super::shared::{print_json, setup_logging};
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::Result;

/// Stations command runner
pub fn run_stations(args: StationsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    let registry = StationRegistry::builtin();
    let stations = match &args.name {
        Some(pattern) => registry.find_by_name(pattern),
        None => registry.stations(),
    };

    match args.format {
        OutputFormat::Json => print_json(&stations)?,
        OutputFormat::Human => {
            println!(
                "{} of {} stations",
                stations.len().to_string().as_str().bold(),
                registry.station_count()
            );
            for station in stations {
                println!(
                    "  {:>5}  {:<6} {:>9.4} {:>10.4}",
                    station.stn, station.name, station.latitude, station.longitude
                );
            }
        }
    }

    Ok(())
}

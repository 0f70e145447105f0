//! Weather command implementation
//!
//! Parses a saved KMA surface report (two-line, or the yearly summary
//! variant) and reports the normalized weather record.

use chrono::{Datelike, Local};
use colored::*;
use std::sync::Arc;
use tracing::{debug, info};

use super::shared::{format_measurement, print_json, read_input, setup_logging};
use crate::app::models::WeatherRecord;
use crate::app::services::station_registry::StationRegistry;
use crate::app::services::weather_report::WeatherReportParser;
use crate::cli::args::{OutputFormat, WeatherArgs};
use crate::Result;

/// Weather command runner
pub fn run_weather(args: WeatherArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let raw = read_input(&args.input)?;
    let parser = WeatherReportParser::new(Arc::new(StationRegistry::builtin()));

    let parsed = if args.summary {
        let year = args.year.unwrap_or_else(|| Local::now().year());
        info!("parsing yearly summary for {}", year);
        parser.parse_yearly_summary(&raw, year)
    } else {
        parser.parse_report(&raw)
    };

    let record = match parsed {
        Ok(record) => record,
        Err(error) => {
            if let Some(snippet) = error.raw_snippet() {
                debug!("raw report prefix: {}", snippet);
            }
            return Err(error);
        }
    };

    match args.format {
        OutputFormat::Json => print_json(&record)?,
        OutputFormat::Human => print_weather_report(&record),
    }

    Ok(())
}

/// Render the record the way the dashboard weather panel presents it
fn print_weather_report(record: &WeatherRecord) {
    println!(
        "{} ({})  observed {}",
        record.stn_name.as_str().bold(),
        record.stn,
        record.tm
    );
    println!("  avg temperature   {}", format_measurement(record.ta_avg, "°C"));
    println!(
        "  max/min           {} / {}",
        format_measurement(record.ta_max, "°C").as_str().red(),
        format_measurement(record.ta_min, "°C").as_str().blue()
    );
    println!("  avg wind          {}", format_measurement(record.ws_avg, " m/s"));
    println!(
        "  max wind          {} at {}",
        format_measurement(record.ws_max, " m/s"),
        record.ws_max_tm.as_deref().unwrap_or("--")
    );
    match (record.wind_direction_label(), record.wd_max) {
        (Some(label), Some(degrees)) => {
            println!("  max wind dir      {} ({}°)", label, degrees);
        }
        _ => println!("  max wind dir      --"),
    }
}

//! Hotspots command implementation
//!
//! Parses a saved FIRMS hotspot CSV batch and reports the typed records.
//! An unreadable input degrades to the synthetic fallback marker rather
//! than failing, matching what the map layer expects from the feed.

use chrono::Local;
use colored::*;
use tracing::info;

use super::shared::{print_json, read_input, setup_logging};
use crate::app::models::FireIntensity;
use crate::app::services::hotspot_csv::{ParseResult, ParseStats, hotspots_or_fallback, synthetic_hotspot};
use crate::cli::args::{HotspotsArgs, OutputFormat};
use crate::config::{DataSource, ProcessorConfig};
use crate::{Error, Result};

/// Hotspots command runner
pub fn run_hotspots(args: HotspotsArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let config = if args.synthetic {
        ProcessorConfig::default().with_synthetic_data()
    } else {
        ProcessorConfig::default()
    };

    let result = match config.data_source {
        DataSource::Synthetic => {
            info!("serving synthetic hotspot data");
            ParseResult {
                hotspots: vec![synthetic_hotspot(today)],
                stats: ParseStats::new(),
                fallback: true,
            }
        }
        DataSource::Live => {
            let input = args
                .input
                .as_ref()
                .ok_or_else(|| Error::configuration("no input CSV provided".to_string()))?;
            let fetched = read_input(input)
                .map_err(|error| Error::upstream(format!("hotspot feed unreadable: {}", error)));
            hotspots_or_fallback(fetched, today)
        }
    };

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => print_hotspot_report(&result),
    }

    Ok(())
}

/// Render the batch summary and records
fn print_hotspot_report(result: &ParseResult) {
    if result.fallback {
        println!(
            "{}",
            "feed unavailable - showing fallback marker".yellow().bold()
        );
    } else {
        println!(
            "{} hotspots ({} rows, {} skipped)",
            result.hotspots.len(),
            result.stats.total_rows,
            result.stats.rows_skipped
        );
    }

    let count_of = |intensity: FireIntensity| {
        result
            .hotspots
            .iter()
            .filter(|h| h.intensity == intensity)
            .count()
    };
    println!(
        "  intensity: {} high / {} medium / {} low",
        count_of(FireIntensity::High).to_string().as_str().red(),
        count_of(FireIntensity::Medium).to_string().as_str().yellow(),
        count_of(FireIntensity::Low).to_string().as_str().green()
    );

    for hotspot in &result.hotspots {
        let acres = hotspot
            .acres_burned
            .map(|a| format!("{:.0} acres", a))
            .unwrap_or_else(|| "--".to_string());
        println!(
            "  {:<8} {:>8.4},{:>9.4}  intensity {}  {:>10}  {}  {}",
            hotspot.id,
            hotspot.latitude,
            hotspot.longitude,
            hotspot.intensity,
            acres,
            hotspot.date_reported,
            hotspot.name
        );
    }
}

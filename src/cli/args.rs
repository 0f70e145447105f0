//! Command-line argument definitions for the firewatch processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the firewatch feed processor
///
/// Normalizes the saved upstream payloads behind the Gyeongbuk firewatch
/// dashboard (KMA surface reports, NASA FIRMS hotspot CSV, persisted
/// education-facility exports) into typed records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "firewatch-processor",
    version,
    about = "Normalize wildfire hotspot, surface weather, and school-status feeds",
    long_about = "Parses the saved upstream payloads behind the Gyeongbuk firewatch dashboard \
                  into typed records: KMA daily surface reports (with sentinel missing-value \
                  substitution), NASA FIRMS hotspot CSV batches (with intensity classification \
                  and region labelling), and persisted education-facility exports (with closed \
                  type normalization)."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the firewatch processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a saved KMA surface weather report
    Weather(WeatherArgs),
    /// Parse a saved NASA FIRMS hotspot CSV batch
    Hotspots(HotspotsArgs),
    /// Normalize a persisted education-facility export
    Institutions(InstitutionsArgs),
    /// Report on the built-in station registry
    Stations(StationsArgs),
}

/// Arguments for the weather command
#[derive(Debug, Clone, Parser)]
pub struct WeatherArgs {
    /// Path to the saved report text
    #[arg(value_name = "REPORT")]
    pub input: PathBuf,

    /// Treat the input as a yearly summary report instead of a two-line report
    #[arg(long = "summary", help = "Parse the multi-row yearly summary variant")]
    pub summary: bool,

    /// Year whose summary row to select (defaults to the current year)
    #[arg(long = "year", value_name = "YYYY", help = "Year to select from a summary report")]
    pub year: Option<i32>,

    /// Output format for the parsed record
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the hotspots command
#[derive(Debug, Clone, Parser)]
pub struct HotspotsArgs {
    /// Path to the saved CSV batch (required unless --synthetic)
    #[arg(value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Date stamped on the fallback/synthetic marker (defaults to today)
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Serve the synthetic placeholder batch instead of parsing input
    #[arg(long = "synthetic", help = "Serve synthetic placeholder data")]
    pub synthetic: bool,

    /// Output format for the parsed batch
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the institutions command
#[derive(Debug, Clone, Parser)]
pub struct InstitutionsArgs {
    /// Path to the persisted JSON export
    #[arg(value_name = "EXPORT")]
    pub input: PathBuf,

    /// Bypass the snapshot cache and refresh it from the input
    #[arg(long = "no-cache", help = "Bypass and refresh the snapshot cache")]
    pub no_cache: bool,

    /// Snapshot cache expiry in seconds (defaults to 300)
    #[arg(long = "cache-ttl", value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Directory for the snapshot cache (defaults to the user cache dir)
    #[arg(long = "cache-path", value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Output format for the normalized records
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Filter stations by name pattern (case-insensitive substring)
    #[arg(long = "name", value_name = "PATTERN")]
    pub name: Option<String>,

    /// Output format for the station report
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Determine the log level from verbosity flags
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl WeatherArgs {
    /// Validate the weather command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input report does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(year) = self.year {
            if !(1900..=2100).contains(&year) {
                return Err(Error::configuration(format!(
                    "Year {} is out of the supported range 1900-2100",
                    year
                )));
            }
            if !self.summary {
                return Err(Error::configuration(
                    "--year only applies to summary reports (add --summary)".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl HotspotsArgs {
    /// Validate the hotspots command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        match (&self.input, self.synthetic) {
            (None, false) => Err(Error::configuration(
                "A CSV path is required unless --synthetic is set".to_string(),
            )),
            (Some(input), false) if !input.exists() => Err(Error::configuration(format!(
                "Input CSV does not exist: {}",
                input.display()
            ))),
            _ => Ok(()),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl InstitutionsArgs {
    /// Validate the institutions command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input export does not exist: {}",
                self.input.display()
            )));
        }

        if self.cache_ttl == Some(0) {
            return Err(Error::configuration(
                "Cache TTL must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl StationsArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_report() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TM STN\n20240101 136").unwrap();
        file
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(3, false), "trace");
        assert_eq!(log_level(2, true), "error");
    }

    #[test]
    fn test_weather_args_validation() {
        let file = temp_report();

        let args = WeatherArgs {
            input: file.path().to_path_buf(),
            summary: true,
            year: Some(2024),
            format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        // Year without --summary
        let mut invalid = args.clone();
        invalid.summary = false;
        assert!(invalid.validate().is_err());

        // Out-of-range year
        let mut invalid = args.clone();
        invalid.year = Some(1500);
        assert!(invalid.validate().is_err());

        // Missing input
        let mut invalid = args;
        invalid.input = PathBuf::from("/nonexistent/report.txt");
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_hotspots_args_validation() {
        let file = temp_report();

        let args = HotspotsArgs {
            input: Some(file.path().to_path_buf()),
            date: None,
            synthetic: false,
            format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        // No input requires --synthetic
        let mut invalid = args.clone();
        invalid.input = None;
        assert!(invalid.validate().is_err());

        let mut synthetic = args;
        synthetic.input = None;
        synthetic.synthetic = true;
        assert!(synthetic.validate().is_ok());
    }

    #[test]
    fn test_institutions_args_validation() {
        let file = temp_report();

        let args = InstitutionsArgs {
            input: file.path().to_path_buf(),
            no_cache: false,
            cache_ttl: Some(60),
            cache_path: None,
            format: OutputFormat::Json,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut invalid = args;
        invalid.cache_ttl = Some(0);
        assert!(invalid.validate().is_err());
    }
}

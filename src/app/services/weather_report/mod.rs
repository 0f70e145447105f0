//! KMA daily surface report parser
//!
//! This module parses the raw text reports served by the KMA surface
//! observation endpoint into typed weather records, substituting the
//! sentinel missing-value markers the feed uses for unmeasured fields.
//!
//! ## Architecture
//!
//! - [`parser`] - Two-line report parsing and record assembly
//! - [`summary`] - Yearly summary variant (multi-row, comma-delimited)
//! - [`fields`] - Sentinel-aware field parsing helpers
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use firewatch_processor::app::services::station_registry::StationRegistry;
//! use firewatch_processor::app::services::weather_report::WeatherReportParser;
//!
//! # fn example() -> firewatch_processor::Result<()> {
//! let parser = WeatherReportParser::new(Arc::new(StationRegistry::builtin()));
//! let record = parser.parse_report("TM STN TA_AVG\n20240101 136 5.2")?;
//! assert_eq!(record.stn_name, "안동");
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod parser;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::WeatherReportParser;

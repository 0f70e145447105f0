//! Core KMA surface report parser implementation
//!
//! Parses the two-line report format (one header line, one data line,
//! whitespace-delimited and positionally aligned) into a weather record.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::fields;
use crate::app::models::WeatherRecord;
use crate::app::services::station_registry::StationRegistry;
use crate::constants::weather_columns;
use crate::{Error, Result};

/// Parser for KMA daily surface reports
///
/// The parser is a pure transform over already-fetched text: it performs
/// no I/O and holds no mutable state beyond the station registry used to
/// resolve display names. Row-level gaps degrade to `None` fields; only
/// structural defects fail the parse.
#[derive(Debug)]
pub struct WeatherReportParser {
    station_registry: Arc<StationRegistry>,
}

impl WeatherReportParser {
    /// Create a new parser with station registry dependency
    pub fn new(station_registry: Arc<StationRegistry>) -> Self {
        Self { station_registry }
    }

    /// Parse a two-line surface report into a weather record
    ///
    /// Fails with a malformed-report error (carrying a bounded snippet of
    /// the raw input) when fewer than two non-empty lines exist or when a
    /// mandatory field cannot be parsed. A single missing optional field
    /// never fails the parse.
    pub fn parse_report(&self, raw: &str) -> Result<WeatherRecord> {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(Error::malformed_report(
                format!("report has {} non-empty lines, expected at least 2", lines.len()),
                raw,
            ));
        }

        // Zip header tokens to data tokens by position. Data tokens beyond
        // the header are ignored; headers without a data token are dropped.
        let headers: Vec<String> = lines[0]
            .split_whitespace()
            .map(|token| token.to_ascii_uppercase())
            .collect();
        let values: Vec<&str> = lines[1].split_whitespace().collect();

        let columns: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(values.iter().copied())
            .collect();

        debug!(
            "surface report: {} header tokens, {} value tokens",
            headers.len(),
            values.len()
        );

        self.build_record(&columns, raw)
    }

    /// Assemble a weather record from a column-name/value mapping
    ///
    /// Shared between the two-line report and the yearly summary variant.
    pub(super) fn build_record(
        &self,
        columns: &HashMap<&str, &str>,
        raw: &str,
    ) -> Result<WeatherRecord> {
        let tm_token = columns.get(weather_columns::TM).copied().ok_or_else(|| {
            Error::malformed_report("mandatory TM column missing from report", raw)
        })?;
        let tm = fields::parse_date(tm_token).ok_or_else(|| {
            Error::malformed_report(format!("invalid observation date '{}'", tm_token), raw)
        })?;

        let stn_token = columns.get(weather_columns::STN).copied().ok_or_else(|| {
            Error::malformed_report("mandatory STN column missing from report", raw)
        })?;
        let stn = fields::parse_station_id(stn_token).ok_or_else(|| {
            Error::malformed_report(format!("invalid station id '{}'", stn_token), raw)
        })?;

        let stn_name = self.station_registry.display_name(stn).to_string();

        let record = WeatherRecord {
            tm,
            stn,
            stn_name,
            ws_avg: optional(columns, weather_columns::WS_AVG).and_then(fields::parse_measurement),
            wd_max: optional(columns, weather_columns::WD_MAX).and_then(fields::parse_direction),
            ws_max: optional(columns, weather_columns::WS_MAX).and_then(fields::parse_measurement),
            ws_max_tm: optional(columns, weather_columns::WS_MAX_TM)
                .and_then(fields::parse_max_wind_time),
            ta_avg: optional(columns, weather_columns::TA_AVG).and_then(fields::parse_measurement),
            ta_max: optional(columns, weather_columns::TA_MAX).and_then(fields::parse_measurement),
            ta_min: optional(columns, weather_columns::TA_MIN).and_then(fields::parse_measurement),
        };

        debug!("parsed weather record for station {} ({})", record.stn, record.stn_name);
        Ok(record)
    }
}

/// Get an optional column value from the mapping
fn optional<'a>(columns: &HashMap<&str, &'a str>, name: &str) -> Option<&'a str> {
    columns.get(name).copied()
}

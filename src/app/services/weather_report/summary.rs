//! Yearly summary report variant
//!
//! Some station payloads arrive as a multi-row, comma-delimited report
//! covering many observation dates. The wanted row is located by the
//! two-digit year prefix of its date field, then extracted through the
//! fixed column index table shared with the two-line format.

use std::collections::HashMap;
use tracing::debug;

use super::parser::WeatherReportParser;
use crate::app::models::WeatherRecord;
use crate::constants::{summary_columns, weather_columns};
use crate::{Error, Result};

impl WeatherReportParser {
    /// Parse the yearly summary variant, selecting the row for `year`
    ///
    /// Rows are matched on the two-digit year prefix of their first field
    /// (e.g. "24" for 2024). Comment lines starting with '#' are skipped.
    /// Fails with a record-not-found error when no row matches, and with a
    /// malformed-report error when the matched row carries too few fields.
    pub fn parse_yearly_summary(&self, raw: &str, year: i32) -> Result<WeatherRecord> {
        let prefix = format!("{:02}", year.rem_euclid(100));

        let row = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .find(|line| {
                line.split(',')
                    .next()
                    .is_some_and(|field| field.trim().starts_with(&prefix))
            })
            .ok_or_else(|| {
                Error::record_not_found(format!(
                    "no summary row matching year prefix '{}'",
                    prefix
                ))
            })?;

        let row_fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if row_fields.len() < summary_columns::MIN_FIELDS {
            return Err(Error::malformed_report(
                format!(
                    "summary row has {} fields, expected at least {}",
                    row_fields.len(),
                    summary_columns::MIN_FIELDS
                ),
                raw,
            ));
        }

        debug!("summary row matched for year prefix '{}'", prefix);

        let columns: HashMap<&str, &str> = [
            (weather_columns::TM, row_fields[summary_columns::TM]),
            (weather_columns::STN, row_fields[summary_columns::STN]),
            (weather_columns::WS_AVG, row_fields[summary_columns::WS_AVG]),
            (weather_columns::WD_MAX, row_fields[summary_columns::WD_MAX]),
            (weather_columns::WS_MAX, row_fields[summary_columns::WS_MAX]),
            (
                weather_columns::WS_MAX_TM,
                row_fields[summary_columns::WS_MAX_TM],
            ),
            (weather_columns::TA_AVG, row_fields[summary_columns::TA_AVG]),
            (weather_columns::TA_MAX, row_fields[summary_columns::TA_MAX]),
            (weather_columns::TA_MIN, row_fields[summary_columns::TA_MIN]),
        ]
        .into_iter()
        .collect();

        self.build_record(&columns, raw)
    }
}

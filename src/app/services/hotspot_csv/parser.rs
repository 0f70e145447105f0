//! Core FIRMS hotspot CSV parser implementation
//!
//! Handles batch parsing of the country CSV payload, per-row extraction
//! through the fixed column positions, and the fallback-on-upstream-error
//! policy.

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info, warn};

use super::intensity::{classify_intensity, estimate_acres};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{FireIntensity, RegionLabel, WildfireHotspot};
use crate::constants::{fallback_hotspot as fallback, firms_columns};
use crate::Result;

/// Parser for NASA FIRMS country CSV payloads
///
/// The first line is treated as a header and carries no schema authority:
/// field meaning is positional. Defective rows are skipped silently to
/// keep the rest of the batch available.
#[derive(Debug, Default)]
pub struct HotspotCsvParser;

impl HotspotCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a CSV payload into hotspot records with statistics
    ///
    /// Never fails: rows that cannot be extracted are counted as skipped
    /// and the remainder of the batch is returned.
    pub fn parse(&self, raw: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut hotspots = Vec::new();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(raw.as_bytes());

        for (index, result) in reader.records().enumerate() {
            let row_number = index + 1;
            stats.total_rows += 1;

            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    debug!("unreadable hotspot row {}: {}", row_number, error);
                    stats.rows_skipped += 1;
                    continue;
                }
            };

            match parse_hotspot_row(&record, row_number) {
                Some(hotspot) => {
                    hotspots.push(hotspot);
                    stats.hotspots_parsed += 1;
                }
                None => {
                    debug!("skipped hotspot row {}", row_number);
                    stats.rows_skipped += 1;
                }
            }
        }

        info!(
            "hotspot batch: {} rows, {} parsed, {} skipped",
            stats.total_rows, stats.hotspots_parsed, stats.rows_skipped
        );

        ParseResult {
            hotspots,
            stats,
            fallback: false,
        }
    }
}

/// Extract one hotspot from a CSV row, or `None` when the row is defective
fn parse_hotspot_row(record: &StringRecord, row_number: usize) -> Option<WildfireHotspot> {
    if record.len() < firms_columns::MIN_FIELDS {
        return None;
    }

    let latitude = parse_coordinate(record.get(firms_columns::LATITUDE))?;
    let longitude = parse_coordinate(record.get(firms_columns::LONGITUDE))?;

    let region = RegionLabel::from_coordinates(latitude, longitude);

    let confidence = record
        .get(firms_columns::CONFIDENCE)
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let brightness = record
        .get(firms_columns::BRIGHTNESS)
        .and_then(|token| token.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite());

    let date_reported = record
        .get(firms_columns::ACQ_DATE)
        .unwrap_or_default()
        .trim()
        .to_string();

    Some(WildfireHotspot {
        id: format!("fire-{}", row_number),
        latitude,
        longitude,
        name: format!("{} 화재 지점 {}", region.label(), row_number),
        intensity: classify_intensity(confidence, brightness),
        date_reported,
        acres_burned: estimate_acres(record.get(firms_columns::FRP)),
        containment: 0,
    })
}

/// Parse a coordinate field, requiring a finite number
fn parse_coordinate(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|token| token.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Build the synthetic placeholder hotspot served when the feed fails
pub fn synthetic_hotspot(date_reported: NaiveDate) -> WildfireHotspot {
    WildfireHotspot {
        id: fallback::ID.to_string(),
        latitude: fallback::LATITUDE,
        longitude: fallback::LONGITUDE,
        name: fallback::NAME.to_string(),
        intensity: FireIntensity::Medium,
        date_reported: date_reported.format("%Y-%m-%d").to_string(),
        acres_burned: Some(fallback::ACRES_BURNED),
        containment: 0,
    }
}

/// Apply the fallback-on-upstream-error policy to a fetched payload
///
/// A transport failure reported by the caller is never propagated: the
/// batch degrades to the single synthetic placeholder so the map keeps at
/// least one renderable point.
pub fn hotspots_or_fallback(fetched: Result<String>, today: NaiveDate) -> ParseResult {
    match fetched {
        Ok(raw) => HotspotCsvParser::new().parse(&raw),
        Err(error) => {
            warn!("hotspot feed unavailable, serving fallback marker: {}", error);
            ParseResult {
                hotspots: vec![synthetic_hotspot(today)],
                stats: ParseStats::new(),
                fallback: true,
            }
        }
    }
}

//! Field parsing utilities for KMA surface reports
//!
//! Helper functions for parsing individual report tokens. Optional fields
//! degrade to `None` on sentinel markers or unparseable input; only the
//! caller decides which fields are mandatory.

use crate::constants::{
    REPORT_DATE_FORMAT, REPORT_DATE_FORMAT_DASHED, SUMMARY_DATE_FORMAT, sentinels,
};
use chrono::NaiveDate;

/// Parse an observation date token
///
/// Accepts the compact (20240101), dashed (2024-01-01), and two-digit-year
/// summary (240101) spellings used across report variants.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    let trimmed = token.trim();
    let format = if trimmed.contains('-') {
        REPORT_DATE_FORMAT_DASHED
    } else if trimmed.len() == 6 {
        SUMMARY_DATE_FORMAT
    } else {
        REPORT_DATE_FORMAT
    };
    NaiveDate::parse_from_str(trimmed, format).ok()
}

/// Parse a station identifier token
pub fn parse_station_id(token: &str) -> Option<i32> {
    token.trim().parse::<i32>().ok().filter(|stn| *stn > 0)
}

/// Parse an optional numeric measurement (wind speed, temperature)
///
/// Sentinel markers and unparseable values both yield `None`.
pub fn parse_measurement(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if sentinels::is_missing_token(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an optional wind direction in degrees (0-359)
pub fn parse_direction(token: &str) -> Option<u16> {
    let trimmed = token.trim();
    if sentinels::is_missing_token(trimmed) {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .filter(|deg| (0..360).contains(deg))
        .map(|deg| deg as u16)
}

/// Parse an optional time-of-maximum-wind token, normalizing to HH:MM
///
/// The feed reports the time as a bare HHMM (or HMM) number; already
/// colon-separated values are accepted and renormalized.
pub fn parse_max_wind_time(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if sentinels::is_missing_token(trimmed) {
        return None;
    }

    let (hour, minute) = if let Some((h, m)) = trimmed.split_once(':') {
        (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)
    } else {
        if !(3..=4).contains(&trimmed.len()) || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let split = trimmed.len() - 2;
        (
            trimmed[..split].parse::<u32>().ok()?,
            trimmed[split..].parse::<u32>().ok()?,
        )
    };

    if hour > 23 || minute > 59 {
        return None;
    }

    Some(format!("{:02}:{:02}", hour, minute))
}

//! Tests for sentinel-aware field parsing helpers

use crate::app::services::weather_report::fields;
use chrono::NaiveDate;

#[test]
fn test_parse_date_formats() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(fields::parse_date("20240101"), Some(expected));
    assert_eq!(fields::parse_date("2024-01-01"), Some(expected));
    assert_eq!(fields::parse_date("240101"), Some(expected));
    assert_eq!(fields::parse_date(" 20240101 "), Some(expected));
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert_eq!(fields::parse_date("yesterday"), None);
    assert_eq!(fields::parse_date("20241301"), None);
    assert_eq!(fields::parse_date(""), None);
}

#[test]
fn test_parse_station_id() {
    assert_eq!(fields::parse_station_id("136"), Some(136));
    assert_eq!(fields::parse_station_id(" 283 "), Some(283));
    assert_eq!(fields::parse_station_id("STN"), None);
    assert_eq!(fields::parse_station_id("-9"), None);
    assert_eq!(fields::parse_station_id("0"), None);
}

#[test]
fn test_parse_measurement_substitutes_sentinels() {
    assert_eq!(fields::parse_measurement("-9"), None);
    assert_eq!(fields::parse_measurement("-9.0"), None);
    assert_eq!(fields::parse_measurement("-99.0"), None);
}

#[test]
fn test_parse_measurement_keeps_real_values() {
    assert_eq!(fields::parse_measurement("3.5"), Some(3.5));
    assert_eq!(fields::parse_measurement("-1.0"), Some(-1.0));
    assert_eq!(fields::parse_measurement("0"), Some(0.0));
}

#[test]
fn test_parse_measurement_degrades_on_garbage() {
    assert_eq!(fields::parse_measurement("n/a"), None);
    assert_eq!(fields::parse_measurement(""), None);
    assert_eq!(fields::parse_measurement("NaN"), None);
}

#[test]
fn test_parse_direction_range() {
    assert_eq!(fields::parse_direction("0"), Some(0));
    assert_eq!(fields::parse_direction("200"), Some(200));
    assert_eq!(fields::parse_direction("359"), Some(359));
    assert_eq!(fields::parse_direction("360"), None);
    assert_eq!(fields::parse_direction("-9"), None);
    assert_eq!(fields::parse_direction("east"), None);
}

#[test]
fn test_parse_max_wind_time_normalizes() {
    assert_eq!(fields::parse_max_wind_time("1423"), Some("14:23".to_string()));
    assert_eq!(fields::parse_max_wind_time("923"), Some("09:23".to_string()));
    assert_eq!(fields::parse_max_wind_time("0005"), Some("00:05".to_string()));
    assert_eq!(fields::parse_max_wind_time("14:23"), Some("14:23".to_string()));
    assert_eq!(fields::parse_max_wind_time("9:05"), Some("09:05".to_string()));
}

#[test]
fn test_parse_max_wind_time_rejects_invalid() {
    assert_eq!(fields::parse_max_wind_time("-9"), None);
    assert_eq!(fields::parse_max_wind_time("2460"), None);
    assert_eq!(fields::parse_max_wind_time("9999"), None);
    assert_eq!(fields::parse_max_wind_time("12345"), None);
    assert_eq!(fields::parse_max_wind_time("ab12"), None);
    assert_eq!(fields::parse_max_wind_time(""), None);
}

//! Tests for batch parsing of FIRMS hotspot CSV payloads

use super::payload;
use crate::Error;
use crate::app::models::{FireIntensity, RegionLabel};
use crate::app::services::hotspot_csv::{HotspotCsvParser, hotspots_or_fallback};
use chrono::NaiveDate;

#[test]
fn test_parse_single_detection() {
    let parser = HotspotCsvParser::new();
    let raw = payload(&["KOR,36.5,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D"]);

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots.len(), 1);
    assert!(!result.fallback);

    let hotspot = &result.hotspots[0];
    assert_eq!(hotspot.id, "fire-1");
    assert_eq!(hotspot.name, "경북 화재 지점 1");
    assert_eq!(hotspot.region(), RegionLabel::Regional);
    assert_eq!(hotspot.intensity, FireIntensity::High);
    assert_eq!(hotspot.date_reported, "2024-01-01");
    assert_eq!(hotspot.acres_burned, Some(500.0));
    assert_eq!(hotspot.containment, 0);
}

#[test]
fn test_national_detection_is_labelled_accordingly() {
    let parser = HotspotCsvParser::new();
    // Seoul-area coordinates, outside the Gyeongbuk box
    let raw = payload(&["KOR,37.55,126.99,305,1,1,2024-01-01,0130,N,VIIRS,n,1,12,N"]);

    let result = parser.parse(&raw);
    let hotspot = &result.hotspots[0];
    assert_eq!(hotspot.region(), RegionLabel::National);
    assert_eq!(hotspot.name, "한국 화재 지점 1");
    assert_eq!(hotspot.intensity, FireIntensity::Medium);
}

#[test]
fn test_short_rows_are_skipped_silently() {
    let parser = HotspotCsvParser::new();
    let raw = payload(&[
        "KOR,36.5",
        "KOR,36.5,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D",
    ]);

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots.len(), 1);
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.rows_skipped, 1);
    // Numbering follows the row position, not the output position
    assert_eq!(result.hotspots[0].id, "fire-2");
}

#[test]
fn test_nonnumeric_coordinates_are_skipped() {
    let parser = HotspotCsvParser::new();
    let raw = payload(&[
        "KOR,somewhere,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D",
        "KOR,36.5,east,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D",
        "KOR,36.5,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D",
    ]);

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots.len(), 1);
    assert_eq!(result.stats.rows_skipped, 2);
}

#[test]
fn test_empty_confidence_uses_brightness() {
    let parser = HotspotCsvParser::new();
    let raw = payload(&["KOR,36.0,129.0,320,1,1,2024-01-02,0300,N,VIIRS,,1,5,D"]);

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots[0].intensity, FireIntensity::High);
    assert_eq!(result.hotspots[0].acres_burned, Some(50.0));
}

#[test]
fn test_unparseable_frp_leaves_acres_unknown() {
    let parser = HotspotCsvParser::new();
    let raw = payload(&["KOR,36.0,129.0,305,1,1,2024-01-02,0300,N,VIIRS,n,1,unknown,D"]);

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots[0].acres_burned, None);
}

#[test]
fn test_empty_payload_yields_empty_batch() {
    let parser = HotspotCsvParser::new();

    let result = parser.parse(super::FIRMS_HEADER);
    assert!(result.hotspots.is_empty());
    assert_eq!(result.stats.total_rows, 0);

    let result = parser.parse("");
    assert!(result.hotspots.is_empty());
}

#[test]
fn test_blank_lines_are_ignored() {
    let parser = HotspotCsvParser::new();
    let raw = format!(
        "{}\n\nKOR,36.5,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D\n\n",
        super::FIRMS_HEADER
    );

    let result = parser.parse(&raw);
    assert_eq!(result.hotspots.len(), 1);
    assert_eq!(result.stats.rows_skipped, 0);
}

#[test]
fn test_upstream_failure_degrades_to_fallback_marker() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let result = hotspots_or_fallback(Err(Error::upstream("connection timed out")), today);

    assert!(result.fallback);
    assert_eq!(result.hotspots.len(), 1);

    let marker = &result.hotspots[0];
    assert_eq!(marker.id, "error-1");
    assert!(marker.name.contains("API 오류"));
    assert_eq!(marker.intensity, FireIntensity::Medium);
    assert_eq!(marker.date_reported, "2024-04-01");
    assert_eq!(marker.region(), RegionLabel::Regional);
}

#[test]
fn test_successful_fetch_passes_through() {
    let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let raw = payload(&["KOR,36.5,128.9,310,1,1,2024-01-01,1200,N,VIIRS,h,1,50,D"]);

    let result = hotspots_or_fallback(Ok(raw), today);
    assert!(!result.fallback);
    assert_eq!(result.hotspots.len(), 1);
    assert_eq!(result.hotspots[0].id, "fire-1");
}

//! Test fixtures and helpers for hotspot CSV parser testing

mod parser_tests;

/// FIRMS country CSV header as served by the VIIRS SNPP NRT endpoint
pub const FIRMS_HEADER: &str = "country_id,latitude,longitude,bright_ti4,scan,track,acq_date,acq_time,satellite,instrument,confidence,version,frp,daynight";

/// Build a payload from the standard header and the given rows
pub fn payload(rows: &[&str]) -> String {
    let mut payload = String::from(FIRMS_HEADER);
    for row in rows {
        payload.push('\n');
        payload.push_str(row);
    }
    payload
}

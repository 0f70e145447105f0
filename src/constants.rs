//! Application constants for the firewatch processor
//!
//! This module contains sentinel values, column mappings, classification
//! thresholds, and default values used throughout the processor.

// =============================================================================
// Sentinel Missing Values
// =============================================================================

/// Sentinel values used by KMA surface reports to mark unmeasured fields
pub mod sentinels {
    /// Integer sentinel for unmeasured fields (wind direction, times)
    pub const MISSING_INT: i64 = -9;

    /// Float sentinel for unmeasured wind fields
    pub const MISSING_FLOAT: f64 = -9.0;

    /// Float sentinel for unmeasured temperature fields
    pub const MISSING_TEMPERATURE: f64 = -99.0;

    /// Literal sentinel tokens as they appear in raw reports
    pub const TOKENS: &[&str] = &["-9", "-9.0", "-99.0"];

    /// Check whether a raw token is a sentinel missing-value marker
    pub fn is_missing_token(token: &str) -> bool {
        let trimmed = token.trim();
        if TOKENS.contains(&trimmed) {
            return true;
        }
        // Catch formatting variants such as "-9.00" or "-99.00"
        trimmed
            .parse::<f64>()
            .is_ok_and(|v| v == MISSING_FLOAT || v == MISSING_TEMPERATURE)
    }
}

// =============================================================================
// Weather Report Columns
// =============================================================================

/// Canonical column names in KMA daily surface reports
pub mod weather_columns {
    /// Observation date (KST)
    pub const TM: &str = "TM";
    /// Station identifier
    pub const STN: &str = "STN";
    /// Daily average wind speed (m/s)
    pub const WS_AVG: &str = "WS_AVG";
    /// Direction of the maximum wind (degrees)
    pub const WD_MAX: &str = "WD_MAX";
    /// Maximum wind speed (m/s)
    pub const WS_MAX: &str = "WS_MAX";
    /// Time of the maximum wind (HHMM)
    pub const WS_MAX_TM: &str = "WS_MAX_TM";
    /// Daily average temperature (C)
    pub const TA_AVG: &str = "TA_AVG";
    /// Daily maximum temperature (C)
    pub const TA_MAX: &str = "TA_MAX";
    /// Daily minimum temperature (C)
    pub const TA_MIN: &str = "TA_MIN";
}

/// Fixed column positions in the comma-delimited yearly summary report
pub mod summary_columns {
    pub const TM: usize = 0;
    pub const STN: usize = 1;
    pub const WS_AVG: usize = 2;
    pub const WD_MAX: usize = 3;
    pub const WS_MAX: usize = 4;
    pub const WS_MAX_TM: usize = 5;
    pub const TA_AVG: usize = 6;
    pub const TA_MAX: usize = 7;
    pub const TA_MIN: usize = 8;

    /// Minimum fields a summary row must carry to be extracted
    pub const MIN_FIELDS: usize = 9;
}

// =============================================================================
// FIRMS Hotspot CSV Columns
// =============================================================================

/// Fixed column positions in the NASA FIRMS country CSV
/// (country_id, latitude, longitude, bright_ti4, scan, track, acq_date,
/// acq_time, satellite, instrument, confidence, version, frp, daynight)
pub mod firms_columns {
    pub const LATITUDE: usize = 1;
    pub const LONGITUDE: usize = 2;
    pub const BRIGHTNESS: usize = 3;
    pub const ACQ_DATE: usize = 6;
    pub const CONFIDENCE: usize = 10;
    pub const FRP: usize = 13;

    /// Rows with fewer fields than this are discarded
    pub const MIN_FIELDS: usize = 8;
}

// =============================================================================
// Intensity Classification Thresholds
// =============================================================================

/// VIIRS categorical confidence flag for high-confidence detections
pub const CONFIDENCE_HIGH_FLAG: &str = "h";

/// VIIRS categorical confidence flag for nominal-confidence detections
pub const CONFIDENCE_NOMINAL_FLAG: &str = "n";

/// Numeric confidence above this is classified high intensity
pub const CONFIDENCE_HIGH_THRESHOLD: f64 = 80.0;

/// Numeric confidence above this is classified medium intensity
pub const CONFIDENCE_MEDIUM_THRESHOLD: f64 = 50.0;

/// Brightness temperature (K) above this is classified high intensity
pub const BRIGHTNESS_HIGH_THRESHOLD: f64 = 315.0;

/// Brightness temperature (K) above this is classified medium intensity
pub const BRIGHTNESS_MEDIUM_THRESHOLD: f64 = 300.0;

/// Scale factor from fire radiative power (MW) to the burned-area estimate
pub const FRP_ACRES_SCALE: f64 = 10.0;

// =============================================================================
// Gyeongbuk Geofence
// =============================================================================

/// Coarse bounding box for the Gyeongbuk region; detections inside it are
/// labelled regional, everything else national
pub const GYEONGBUK_LAT_MIN: f64 = 35.5;
pub const GYEONGBUK_LAT_MAX: f64 = 37.0;
pub const GYEONGBUK_LNG_MIN: f64 = 128.5;
pub const GYEONGBUK_LNG_MAX: f64 = 130.0;

// =============================================================================
// Fallback Hotspot
// =============================================================================

/// Synthetic placeholder emitted when the hotspot feed itself fails,
/// so the map always has at least one renderable point
pub mod fallback_hotspot {
    pub const ID: &str = "error-1";
    pub const LATITUDE: f64 = 36.57;
    pub const LONGITUDE: f64 = 128.7;
    pub const NAME: &str = "경북 테스트 데이터 (API 오류)";
    pub const ACRES_BURNED: f64 = 30.0;
}

// =============================================================================
// Station Registry
// =============================================================================

/// Display label used when a station id is not in the registry
pub const UNKNOWN_STATION_NAME: &str = "알 수 없음";

// =============================================================================
// Diagnostics and Caching
// =============================================================================

/// Maximum characters of raw input preserved in a malformed-report error
pub const RAW_SNIPPET_MAX_CHARS: usize = 500;

/// Default snapshot cache expiry in seconds (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Directory name for the snapshot cache under the user cache dir
pub const CACHE_DIR_NAME: &str = "firewatch-processor";

/// Snapshot cache key for normalized institution records
pub const INSTITUTIONS_CACHE_KEY: &str = "institutions";

// =============================================================================
// Date Formats
// =============================================================================

/// Compact report date format (e.g. 20240101)
pub const REPORT_DATE_FORMAT: &str = "%Y%m%d";

/// Dashed report date format (e.g. 2024-01-01)
pub const REPORT_DATE_FORMAT_DASHED: &str = "%Y-%m-%d";

/// Two-digit-year date format used by yearly summary rows (e.g. 240101)
pub const SUMMARY_DATE_FORMAT: &str = "%y%m%d";

// =============================================================================
// Helper Functions
// =============================================================================

/// Eight-way Korean compass labels, clockwise from north
pub const COMPASS_LABELS: [&str; 8] = ["북", "북동", "동", "남동", "남", "남서", "서", "북서"];

/// Map a wind direction in degrees to its eight-way compass label
pub fn compass_label(degrees: u16) -> &'static str {
    let index = ((f64::from(degrees) / 45.0).round() as usize) % 8;
    COMPASS_LABELS[index]
}

//! Test fixtures and helpers for surface report parser testing

use std::sync::Arc;

use crate::app::services::station_registry::StationRegistry;
use crate::app::services::weather_report::WeatherReportParser;

// Test modules
mod fields_tests;

/// Helper to create a parser over the built-in registry
pub fn create_test_parser() -> WeatherReportParser {
    WeatherReportParser::new(Arc::new(StationRegistry::builtin()))
}

/// A complete two-line report for station 136 (안동)
pub fn complete_report() -> &'static str {
    "TM STN WS_AVG WD_MAX WS_MAX WS_MAX_TM TA_AVG TA_MAX TA_MIN\n\
     20240101 136 2.1 200 3.5 1423 5.2 10.1 -1.0"
}

/// A report with sentinel markers in the wind-average and minimum-temperature columns
pub fn report_with_sentinels() -> &'static str {
    "TM STN WS_AVG WD_MAX WS_MAX WS_MAX_TM TA_AVG TA_MAX TA_MIN\n\
     20240101 136 -9 200 3.5 1423 5.2 10.1 -99.0"
}

/// A yearly summary report carrying rows for two years
pub fn summary_report() -> &'static str {
    "# SFC daily summary\n\
     # TM,STN,WS_AVG,WD_MAX,WS_MAX,WS_MAX_TM,TA_AVG,TA_MAX,TA_MIN\n\
     230401,136,1.8,270,4.1,1015,11.2,17.8,6.0\n\
     240401,136,2.4,90,5.0,1310,12.9,19.4,-9.0\n"
}

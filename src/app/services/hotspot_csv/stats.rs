//! Parsing statistics and result structures for hotspot CSV processing

use crate::app::models::WildfireHotspot;

/// Parsing result with hotspot records and basic statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct ParseResult {
    /// Successfully parsed hotspot records
    pub hotspots: Vec<WildfireHotspot>,

    /// Basic parsing statistics
    pub stats: ParseStats,

    /// Whether the batch is the synthetic fallback marker rather than
    /// parsed feed data
    pub fallback: bool,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of hotspots successfully parsed
    pub hotspots_parsed: usize,

    /// Number of rows skipped (short rows, non-finite coordinates)
    pub rows_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            hotspots_parsed: 0,
            rows_skipped: 0,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.hotspots_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

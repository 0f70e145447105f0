//! NASA FIRMS hotspot CSV parser
//!
//! This module converts the FIRMS country CSV payload (VIIRS detections)
//! into typed hotspot records for the map layer. Row-level defects are
//! skipped, never surfaced: partial availability of map data beats a
//! failed batch. When the feed itself is unavailable the batch degrades
//! to a single clearly-marked synthetic placeholder so the map always has
//! a renderable point.
//!
//! ## Architecture
//!
//! - [`parser`] - Batch parsing, row extraction, and the fallback policy
//! - [`intensity`] - Intensity classification and burned-area estimation
//! - [`stats`] - Parsing statistics and result structures

pub mod intensity;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use intensity::{classify_intensity, estimate_acres};
pub use parser::{HotspotCsvParser, hotspots_or_fallback, synthetic_hotspot};
pub use stats::{ParseResult, ParseStats};

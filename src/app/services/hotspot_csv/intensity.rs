//! Intensity classification for hotspot detections
//!
//! Classification prefers the per-detection confidence indicator when the
//! feed carries one; rows without it are classified on brightness
//! temperature. Both paths bucket into the same three-level ordinal scale
//! that drives marker colour and radius.

use crate::app::models::FireIntensity;
use crate::constants::{
    BRIGHTNESS_HIGH_THRESHOLD, BRIGHTNESS_MEDIUM_THRESHOLD, CONFIDENCE_HIGH_FLAG,
    CONFIDENCE_HIGH_THRESHOLD, CONFIDENCE_MEDIUM_THRESHOLD, CONFIDENCE_NOMINAL_FLAG,
    FRP_ACRES_SCALE,
};

/// Classify detection intensity from confidence, falling back to brightness
///
/// Confidence wins whenever the field is present and non-empty: the
/// categorical flags ("h"/"n") map directly, numeric values bucket at
/// >80 and >50. Without confidence, brightness temperature buckets at
/// >315 K and >300 K. Everything else is low.
pub fn classify_intensity(confidence: Option<&str>, brightness: Option<f64>) -> FireIntensity {
    if let Some(value) = confidence.map(str::trim).filter(|v| !v.is_empty()) {
        let numeric = value.parse::<f64>().ok();

        if value == CONFIDENCE_HIGH_FLAG || numeric.is_some_and(|v| v > CONFIDENCE_HIGH_THRESHOLD) {
            return FireIntensity::High;
        }
        if value == CONFIDENCE_NOMINAL_FLAG
            || numeric.is_some_and(|v| v > CONFIDENCE_MEDIUM_THRESHOLD)
        {
            return FireIntensity::Medium;
        }
        return FireIntensity::Low;
    }

    match brightness {
        Some(kelvin) if kelvin > BRIGHTNESS_HIGH_THRESHOLD => FireIntensity::High,
        Some(kelvin) if kelvin > BRIGHTNESS_MEDIUM_THRESHOLD => FireIntensity::Medium,
        _ => FireIntensity::Low,
    }
}

/// Derive a burned-area estimate from the fire radiative power field
///
/// Returns `None` when the field is absent or not parseable as a finite
/// number; the estimate is FRP scaled by a fixed factor, not a measured
/// area.
pub fn estimate_acres(frp_field: Option<&str>) -> Option<f64> {
    frp_field
        .and_then(|token| token.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value * FRP_ACRES_SCALE)
}

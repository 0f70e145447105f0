//! Data models for firewatch feed normalization
//!
//! This module contains the core data structures for weather observations,
//! wildfire hotspot detections, and education-facility records as they are
//! consumed by the dashboard layer.

use crate::constants::{
    self, GYEONGBUK_LAT_MAX, GYEONGBUK_LAT_MIN, GYEONGBUK_LNG_MAX, GYEONGBUK_LNG_MIN,
};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Station
// =============================================================================

/// A fixed KMA surface observation point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Numeric station identifier (e.g. 136 for 안동)
    pub stn: i32,

    /// Korean display name
    pub name: String,

    /// WGS84 latitude in decimal degrees
    pub latitude: f64,

    /// WGS84 longitude in decimal degrees
    pub longitude: f64,
}

impl Station {
    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

// =============================================================================
// Weather Record
// =============================================================================

/// A single daily surface observation, normalized from a KMA report
///
/// Any field whose raw value carried a sentinel missing-value marker
/// (-9, -9.0, -99.0) is `None`; the sentinel itself never survives parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation date (KST)
    pub tm: NaiveDate,

    /// Station identifier
    pub stn: i32,

    /// Station display name, resolved via the registry
    pub stn_name: String,

    /// Daily average wind speed (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_avg: Option<f64>,

    /// Direction of the maximum wind (degrees, 0-359)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wd_max: Option<u16>,

    /// Maximum wind speed (m/s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_max: Option<f64>,

    /// Time of the maximum wind, normalized to HH:MM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_max_tm: Option<String>,

    /// Daily average temperature (C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ta_avg: Option<f64>,

    /// Daily maximum temperature (C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ta_max: Option<f64>,

    /// Daily minimum temperature (C)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ta_min: Option<f64>,
}

impl WeatherRecord {
    /// Eight-way Korean compass label for the maximum-wind direction
    pub fn wind_direction_label(&self) -> Option<&'static str> {
        self.wd_max.map(constants::compass_label)
    }
}

// =============================================================================
// Region Label
// =============================================================================

/// Coarse region classification for a hotspot detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionLabel {
    /// Inside the Gyeongbuk bounding box
    Regional,
    /// Anywhere else in the country feed
    National,
}

impl RegionLabel {
    /// Classify a coordinate pair against the Gyeongbuk geofence
    ///
    /// The box is a coarse approximation (lat 35.5-37.0, lng 128.5-130.0),
    /// not an administrative boundary lookup.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        let in_box = (GYEONGBUK_LAT_MIN..=GYEONGBUK_LAT_MAX).contains(&latitude)
            && (GYEONGBUK_LNG_MIN..=GYEONGBUK_LNG_MAX).contains(&longitude);
        if in_box {
            RegionLabel::Regional
        } else {
            RegionLabel::National
        }
    }

    /// Korean display label used in hotspot names
    pub fn label(self) -> &'static str {
        match self {
            RegionLabel::Regional => "경북",
            RegionLabel::National => "한국",
        }
    }
}

impl std::fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Fire Intensity
// =============================================================================

/// Ordinal intensity classification for a hotspot detection
///
/// Derived from the detection confidence when present, falling back to
/// brightness temperature. Drives marker colour and radius on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum FireIntensity {
    /// Low-confidence or cool detection
    Low = 1,

    /// Nominal-confidence detection
    Medium = 2,

    /// High-confidence or very hot detection
    High = 3,
}

impl FireIntensity {
    /// Ordinal value (1-3) as serialized for the map layer
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Get human-readable description of this intensity
    pub fn description(self) -> &'static str {
        match self {
            FireIntensity::Low => "Low - weak or low-confidence detection",
            FireIntensity::Medium => "Medium - nominal-confidence detection",
            FireIntensity::High => "High - strong or high-confidence detection",
        }
    }

    /// Get all possible intensity values in ascending order
    pub fn all_values() -> [FireIntensity; 3] {
        [
            FireIntensity::Low,
            FireIntensity::Medium,
            FireIntensity::High,
        ]
    }
}

impl From<FireIntensity> for u8 {
    fn from(intensity: FireIntensity) -> Self {
        intensity as u8
    }
}

impl TryFrom<u8> for FireIntensity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(FireIntensity::Low),
            2 => Ok(FireIntensity::Medium),
            3 => Ok(FireIntensity::High),
            _ => Err(Error::data_validation(format!(
                "Invalid intensity value {}: must be 1, 2, or 3",
                value
            ))),
        }
    }
}

impl std::fmt::Display for FireIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

// =============================================================================
// Wildfire Hotspot
// =============================================================================

/// One detected thermal anomaly from the satellite fire-detection feed
///
/// Identifiers are sequential within a parse batch, not globally unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireHotspot {
    /// Batch-local identifier (e.g. "fire-3")
    pub id: String,

    /// WGS84 latitude in decimal degrees
    pub latitude: f64,

    /// WGS84 longitude in decimal degrees
    pub longitude: f64,

    /// Display name combining region label and sequence number
    pub name: String,

    /// Ordinal intensity classification
    pub intensity: FireIntensity,

    /// Acquisition date as reported upstream (calendar date string)
    pub date_reported: String,

    /// Burned-area estimate derived from fire radiative power
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acres_burned: Option<f64>,

    /// Containment percentage (0-100); upstream never reports it, so 0
    pub containment: u8,
}

impl WildfireHotspot {
    /// Region classification recomputed from the detection coordinates
    pub fn region(&self) -> RegionLabel {
        RegionLabel::from_coordinates(self.latitude, self.longitude)
    }
}

// =============================================================================
// Institution Kind
// =============================================================================

/// Closed classification of education facilities
///
/// Persisted records carry the type as a free-form Korean label; the
/// normalizer maps every input into exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionKind {
    ElementarySchool,
    MiddleSchool,
    HighSchool,
    University,
    EducationOffice,
}

impl InstitutionKind {
    /// Map a raw persisted label into the closed enumeration
    ///
    /// Total: unrecognized labels map to `ElementarySchool`, matching the
    /// behaviour the dashboard has always had for dirty rows.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "초등학교" => InstitutionKind::ElementarySchool,
            "중학교" => InstitutionKind::MiddleSchool,
            "고등학교" => InstitutionKind::HighSchool,
            "대학교" => InstitutionKind::University,
            "교육청" => InstitutionKind::EducationOffice,
            _ => InstitutionKind::ElementarySchool,
        }
    }

    /// Korean label for this kind, as persisted upstream
    pub fn label(self) -> &'static str {
        match self {
            InstitutionKind::ElementarySchool => "초등학교",
            InstitutionKind::MiddleSchool => "중학교",
            InstitutionKind::HighSchool => "고등학교",
            InstitutionKind::University => "대학교",
            InstitutionKind::EducationOffice => "교육청",
        }
    }

    /// Get all possible kind values
    pub fn all_values() -> [InstitutionKind; 5] {
        [
            InstitutionKind::ElementarySchool,
            InstitutionKind::MiddleSchool,
            InstitutionKind::HighSchool,
            InstitutionKind::University,
            InstitutionKind::EducationOffice,
        ]
    }
}

impl std::fmt::Display for InstitutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Educational Institution
// =============================================================================

/// A normalized education-facility record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalInstitution {
    /// Record identifier from the managed database
    pub id: String,

    /// Facility name
    pub name: String,

    /// Closed facility classification
    pub kind: InstitutionKind,

    /// WGS84 latitude in decimal degrees
    pub latitude: f64,

    /// WGS84 longitude in decimal degrees
    pub longitude: f64,

    /// Street address
    pub address: String,

    /// Contact number (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,

    /// Whether the facility is currently closed
    pub is_closed: bool,

    /// Whether the facility is running online classes
    pub is_online_class: bool,

    /// Record creation timestamp (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update timestamp (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Free-text note (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

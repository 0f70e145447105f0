//! Firewatch Processor Library
//!
//! A Rust library for normalizing the upstream data feeds behind the
//! Gyeongbuk firewatch dashboard into typed records for display.
//!
//! This library provides tools for:
//! - Parsing KMA daily surface weather reports with sentinel-value substitution
//! - Parsing NASA FIRMS hotspot CSV batches with intensity classification
//! - Normalizing persisted education-facility records into a closed domain model
//! - Resolving station identifiers against a built-in station registry
//! - Caching normalized snapshots with a wall-clock expiry

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod hotspot_csv;
        pub mod institution;
        pub mod snapshot_cache;
        pub mod station_registry;
        pub mod weather_report;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    EducationalInstitution, FireIntensity, InstitutionKind, RegionLabel, Station, WeatherRecord,
    WildfireHotspot,
};
pub use config::{DataSource, ProcessorConfig};

/// Result type alias for the firewatch processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for feed normalization operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Structurally unparseable report (too few lines, mandatory field not numeric)
    #[error("malformed report: {message}")]
    MalformedReport {
        message: String,
        /// Bounded prefix of the raw payload, kept for diagnostics
        snippet: String,
    },

    /// Expected row or station absent from a multi-row report
    #[error("record not found: {message}")]
    RecordNotFound { message: String },

    /// Network/transport failure reported by the caller
    #[error("upstream failure: {message}")]
    UpstreamFailure { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("data validation error: {message}")]
    DataValidation { message: String },

    /// Snapshot cache error
    #[error("cache error: {message}")]
    Cache { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Create a malformed-report error, retaining a bounded snippet of the raw input
    pub fn malformed_report(message: impl Into<String>, raw: &str) -> Self {
        Self::MalformedReport {
            message: message.into(),
            snippet: bounded_snippet(raw),
        }
    }

    /// Create a record-not-found error
    pub fn record_not_found(message: impl Into<String>) -> Self {
        Self::RecordNotFound {
            message: message.into(),
        }
    }

    /// Create an upstream-failure error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Get the diagnostic snippet carried by a malformed-report error, if any
    pub fn raw_snippet(&self) -> Option<&str> {
        match self {
            Self::MalformedReport { snippet, .. } => Some(snippet),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

/// Truncate a raw payload to a bounded, char-safe diagnostic prefix
pub(crate) fn bounded_snippet(raw: &str) -> String {
    raw.chars().take(constants::RAW_SNIPPET_MAX_CHARS).collect()
}

//! Configuration for feed normalization.
//!
//! Provides the processor configuration structure, including the explicit
//! data-source selection that replaces scattered test-data flags.

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Where hotspot and weather payloads come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// Payloads fetched from the real upstream feeds
    Live,
    /// Synthetic placeholder records, for demos and offline development
    Synthetic,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Live
    }
}

/// Global configuration for the firewatch processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Data source selection for hotspot and weather payloads
    pub data_source: DataSource,

    /// Snapshot cache expiry in seconds
    pub cache_ttl_secs: u64,

    /// Override for the snapshot cache directory
    pub cache_path: Option<PathBuf>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::Live,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_path: None,
        }
    }
}

impl ProcessorConfig {
    /// Create configuration with an explicit data source
    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = data_source;
        self
    }

    /// Create configuration serving synthetic placeholder data
    pub fn with_synthetic_data(mut self) -> Self {
        self.data_source = DataSource::Synthetic;
        self
    }

    /// Create configuration with a custom cache expiry
    pub fn with_cache_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.cache_ttl_secs = ttl_secs;
        self
    }

    /// Create configuration with a custom cache directory
    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = Some(path);
        self
    }

    /// Snapshot cache expiry as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

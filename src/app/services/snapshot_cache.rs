//! Snapshot cache with wall-clock expiry
//!
//! Persists normalized snapshots as timestamped JSON files so repeated
//! dashboard refreshes within the expiry window are served locally instead
//! of re-fetching. Access is single-threaded from the UI path; there is no
//! locking.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::CACHE_DIR_NAME;
use crate::{Error, Result};

/// A cached value with its storage timestamp
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    /// Wall-clock time the snapshot was written
    cached_at: DateTime<Utc>,

    /// The cached payload
    value: T,
}

/// File-backed snapshot cache keyed by name
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    /// Directory holding one JSON file per key
    root: PathBuf,

    /// Expiry window for cached snapshots
    ttl: Duration,
}

impl SnapshotCache {
    /// Create a cache rooted at an explicit directory
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
        }
    }

    /// Create a cache under the user cache directory
    pub fn with_default_location(ttl: Duration) -> Result<Self> {
        let base = dirs::cache_dir()
            .ok_or_else(|| Error::cache("could not determine user cache directory"))?;
        Ok(Self::new(base.join(CACHE_DIR_NAME), ttl))
    }

    /// Store a snapshot under the given key, stamped with the current time
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(|e| Error::io(format!("failed to create cache dir {}", self.root.display()), e))?;

        let envelope = Envelope {
            cached_at: Utc::now(),
            value,
        };
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(&envelope)?;
        fs::write(&path, json)
            .map_err(|e| Error::io(format!("failed to write snapshot {}", path.display()), e))?;

        debug!("cached snapshot '{}' at {}", key, path.display());
        Ok(())
    }

    /// Fetch a fresh snapshot and its age
    ///
    /// Absence is a normal case: missing, expired, or unreadable entries
    /// all yield `None`. Expired and unreadable entries are removed so the
    /// next fetch starts clean.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<(T, Duration)> {
        let path = self.path_for(key);
        let raw = fs::read_to_string(&path).ok()?;

        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!("discarding unreadable snapshot '{}': {}", key, error);
                let _ = fs::remove_file(&path);
                return None;
            }
        };

        let age = (Utc::now() - envelope.cached_at)
            .to_std()
            .unwrap_or_default();

        if Self::is_expired(age, self.ttl) {
            debug!("snapshot '{}' expired ({}s old)", key, age.as_secs());
            let _ = fs::remove_file(&path);
            return None;
        }

        Some((envelope.value, age))
    }

    /// Check whether a snapshot of the given age has passed its expiry
    pub fn is_expired(age: Duration, ttl: Duration) -> bool {
        age > ttl
    }

    /// Remove a snapshot regardless of freshness
    pub fn invalidate(&self, key: &str) {
        let path = self.path_for(key);
        if path.exists() {
            let _ = fs::remove_file(&path);
            debug!("invalidated snapshot '{}'", key);
        }
    }

    /// Directory holding the cached snapshots
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

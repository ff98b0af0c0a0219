//! Disk cache for provider responses
//!
//! Stores serializable data as JSON files with `cached_at`/`expires_at`
//! stamps under the XDG cache directory.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// On-disk envelope around a cached value
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    cached_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the data was originally cached
    pub cached_at: DateTime<Utc>,
    /// Whether the cache entry has expired
    pub is_expired: bool,
}

/// Manages reading and writing cached data to disk
///
/// Files live in `~/.cache/pvflood/` on Linux (or the platform equivalent),
/// one `<key>.json` per entry.
#[derive(Debug, Clone)]
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    /// Creates a CacheManager in the XDG cache directory.
    ///
    /// Returns `None` if the directory cannot be determined (e.g. no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "pvflood")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a CacheManager rooted at `cache_dir`
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Writes `data` under `key`, fresh for `ttl`.
    ///
    /// Creates the cache directory if needed.
    pub fn write<T: Serialize>(&self, key: &str, data: &T, ttl: Duration) -> io::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;

        let now = Utc::now();
        let entry = CacheEntry {
            data,
            cached_at: now,
            expires_at: now + ttl,
        };

        let json = serde_json::to_string(&entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(self.cache_path(key), json)?;
        debug!("Cached {} until {}", key, entry.expires_at);
        Ok(())
    }

    /// Reads the entry stored under `key`.
    ///
    /// Returns `None` if the entry is missing or unreadable. Expired entries
    /// are returned with `is_expired = true`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let content = fs::read_to_string(self.cache_path(key)).ok()?;
        let entry: CacheEntry<T> = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Ignoring corrupt cache entry {}: {}", key, e);
                return None;
            }
        };

        Some(CachedData {
            data: entry.data,
            cached_at: entry.cached_at,
            is_expired: Utc::now() > entry.expires_at,
        })
    }
}

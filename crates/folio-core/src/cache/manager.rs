use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::CacheStore;
use crate::models::SourceKey;

/// Namespace prefix for every cache key.
pub const KEY_PREFIX: &str = "social_data_";

/// Entries older than one hour are never served.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Envelope written to the store: the value plus when it was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: Utc::now(),
        }
    }

    /// Time since the entry was stored. A timestamp in the future counts as zero.
    pub fn age(&self) -> Duration {
        age_at(self.timestamp, Utc::now())
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(ttl, Utc::now())
    }

    /// Expired only once strictly older than `ttl` as of `now`.
    pub fn is_expired_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        age_at(self.timestamp, now) > ttl
    }
}

/// Timestamp-only view of an envelope, for inspecting age without decoding data.
#[derive(Debug, Deserialize)]
struct EnvelopeHeader {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    timestamp: DateTime<Utc>,
}

fn age_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (now - timestamp).to_std().unwrap_or(Duration::ZERO)
}

/// How old a cached entry is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheAge {
    pub cached_at: DateTime<Utc>,
    pub expired: bool,
}

impl CacheAge {
    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }
}

/// TTL cache over a [`CacheStore`], one entry per source.
///
/// Every failure of the underlying store (unreadable entry, corrupt JSON,
/// failed write) is logged and treated as a miss or a skipped write.
pub struct CacheManager<S> {
    store: S,
    ttl: Duration,
}

impl<S: CacheStore> CacheManager<S> {
    pub fn new(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(key: SourceKey) -> String {
        format!("{}{}", KEY_PREFIX, key.as_str())
    }

    fn load_raw(&self, key: SourceKey) -> Option<String> {
        match self.store.get(&Self::storage_key(key)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(cache = %key, error = %e, "Cache read error");
                None
            }
        }
    }

    fn evict(&self, key: SourceKey) {
        if let Err(e) = self.store.remove(&Self::storage_key(key)) {
            warn!(cache = %key, error = %e, "Failed to remove cache entry");
        }
    }

    /// Cached value for `key`, or `None` if missing, expired or unreadable.
    /// Expired entries are removed on the way out.
    pub fn get<T: DeserializeOwned>(&self, key: SourceKey) -> Option<T> {
        let raw = self.load_raw(key)?;

        let cached: CachedData<T> = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(cache = %key, error = %e, "Failed to parse cache entry");
                return None;
            }
        };

        if cached.is_expired(self.ttl) {
            debug!(cache = %key, age_secs = cached.age().as_secs(), "Cache entry expired");
            self.evict(key);
            return None;
        }

        debug!(cache = %key, "Cache hit");
        Some(cached.data)
    }

    /// Store `value` under `key`, stamped now.
    pub fn set<T: Serialize>(&self, key: SourceKey, value: &T) {
        let contents = match serde_json::to_string(&CachedData::new(value)) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(cache = %key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = self.store.set(&Self::storage_key(key), &contents) {
            warn!(cache = %key, error = %e, "Cache write error");
        }
    }

    pub fn clear(&self, keys: &[SourceKey]) {
        for &key in keys {
            self.evict(key);
        }
    }

    pub fn clear_all(&self) {
        self.clear(&SourceKey::ALL);
    }

    /// Age of the entry for `key` without evicting it.
    pub fn age(&self, key: SourceKey) -> Option<CacheAge> {
        let raw = self.load_raw(key)?;
        match serde_json::from_str::<EnvelopeHeader>(&raw) {
            Ok(header) => Some(CacheAge {
                cached_at: header.timestamp,
                expired: age_at(header.timestamp, Utc::now()) > self.ttl,
            }),
            Err(e) => {
                debug!(cache = %key, error = %e, "Failed to load cache for age display");
                None
            }
        }
    }

    pub fn status(&self) -> Vec<(SourceKey, Option<CacheAge>)> {
        SourceKey::ALL
            .into_iter()
            .map(|key| (key, self.age(key)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

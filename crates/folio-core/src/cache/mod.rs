//! Local caching module for fetched source data.
//!
//! This module provides the `CacheManager`, a TTL cache keyed by source
//! (`github`, `medium`, `linkedin`), and the `CacheStore` capability it
//! writes through. Entries are JSON envelopes `{data, timestamp}` and are
//! considered expired after 60 minutes.
//!
//! Store implementations:
//! - `FileStore`: one JSON file per key in the user cache directory
//! - `MemoryStore`: in-process map, for tests and ephemeral runs

pub mod manager;
pub mod store;

pub use manager::{CacheAge, CacheManager, CachedData, DEFAULT_TTL, KEY_PREFIX};
pub use store::{CacheStore, FileStore, MemoryStore, StoreError};

//! Core library for folio.
//!
//! Fetches a developer's public GitHub profile and repositories, Medium
//! articles and a hand-maintained LinkedIn summary, normalizes them into
//! stable shapes, and caches them locally with a one-hour TTL.
//!
//! Construct a [`SocialDataFetcher`] from a [`Config`] and a cache store,
//! then call [`SocialDataFetcher::refresh_all`].

pub mod api;
pub mod cache;
pub mod config;
pub mod fetcher;
pub mod models;
pub mod sources;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use cache::{CacheManager, CacheStore, FileStore, MemoryStore};
pub use config::Config;
pub use fetcher::SocialDataFetcher;
pub use models::{AggregatedResult, RefreshOptions, SourceKey};

//! Aggregating fetcher for the portfolio data sources.
//!
//! `SocialDataFetcher` owns the cache and the three sources. Each network
//! source is read through the cache; a failure anywhere in a source is
//! logged and surfaces as `None` for that source only, so
//! [`SocialDataFetcher::refresh_all`] always returns a complete result.

use std::panic::AssertUnwindSafe;

use chrono::Utc;
use futures::FutureExt;
use tracing::{debug, error, info};

use crate::api::{ApiClient, ApiError};
use crate::cache::{CacheManager, CacheStore, FileStore};
use crate::config::Config;
use crate::models::{AggregatedResult, ArticleSummary, GitHubData, RefreshOptions, StaticProfile};
use crate::sources::{GitHubSource, LinkedInSource, MediumSource, Source};

pub struct SocialDataFetcher<S> {
    cache: CacheManager<S>,
    github: GitHubSource,
    medium: MediumSource,
    linkedin: LinkedInSource,
}

impl SocialDataFetcher<FileStore> {
    /// Fetcher whose cache persists in the configured cache directory.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = FileStore::new(config.cache_dir()?);
        Ok(Self::new(config, store)?)
    }
}

impl<S: CacheStore> SocialDataFetcher<S> {
    pub fn new(config: &Config, store: S) -> Result<Self, ApiError> {
        let client = ApiClient::new(config.request_timeout())?;
        Ok(Self::with_client(config, store, client))
    }

    /// Build the fetcher around an existing client, sharing its connection pool.
    pub fn with_client(config: &Config, store: S, client: ApiClient) -> Self {
        Self {
            cache: CacheManager::new(store, config.cache_ttl()),
            github: GitHubSource::new(
                client.clone(),
                &config.github_api_base,
                &config.github_username,
            ),
            medium: MediumSource::new(client, &config.feed_api_base, config.medium_feed_url()),
            linkedin: LinkedInSource::new(config.linkedin_url()),
        }
    }

    pub fn cache(&self) -> &CacheManager<S> {
        &self.cache
    }

    /// Read-through fetch: cached value if fresh, otherwise fetch, normalize and cache.
    /// With `force` the cache is written but never read.
    async fn fetch_cached<Src: Source>(&self, source: &Src, force: bool) -> Option<Src::Output> {
        if !force {
            if let Some(cached) = self.cache.get::<Src::Output>(Src::KEY) {
                return Some(cached);
            }
        }

        debug!(source = %Src::KEY, "Cache miss, fetching");
        match source.fetch_raw().await {
            Ok(raw) => {
                let data = Src::normalize(raw);
                self.cache.set(Src::KEY, &data);
                info!(source = %Src::KEY, "Source fetched");
                Some(data)
            }
            Err(e) => {
                error!(source = %Src::KEY, upstream = e.is_upstream(), error = %e, "Source fetch failed");
                None
            }
        }
    }

    pub async fn fetch_github(&self, force: bool) -> Option<GitHubData> {
        self.fetch_cached(&self.github, force).await
    }

    pub async fn fetch_medium(&self, force: bool) -> Option<Vec<ArticleSummary>> {
        self.fetch_cached(&self.medium, force).await
    }

    pub fn linkedin(&self) -> StaticProfile {
        self.linkedin.profile()
    }

    /// Fetch every source concurrently and assemble the result.
    ///
    /// Never fails: failed sources are `None`, and if the join itself
    /// panics every section is `None`.
    pub async fn refresh_all(&self, options: RefreshOptions) -> AggregatedResult {
        info!(force = options.force_refresh, "Refreshing all sources");

        // Removal may fail; forced fetches skip cache reads regardless
        let force = options.force_refresh;
        if force {
            self.clear_cache();
        }

        let joined = AssertUnwindSafe(async {
            tokio::join!(self.fetch_github(force), self.fetch_medium(force), async {
                self.linkedin()
            })
        })
        .catch_unwind()
        .await;

        match joined {
            Ok((github, medium, linkedin)) => {
                let result = AggregatedResult {
                    github,
                    medium,
                    linkedin: Some(linkedin),
                    fetched_at: Utc::now(),
                };
                info!(missing = ?result.missing_sources(), "Refresh complete");
                result
            }
            Err(_) => {
                error!("Refresh aborted unexpectedly, returning empty result");
                AggregatedResult::unavailable()
            }
        }
    }

    /// Drop every cached source. Best-effort.
    pub fn clear_cache(&self) {
        info!("Clearing cached source data");
        self.cache.clear_all();
    }
}

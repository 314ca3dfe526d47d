use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArticleSummary, GitHubData, SourceKey, StaticProfile};

/// Options accepted by `SocialDataFetcher::refresh_all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshOptions {
    /// Drop every cached source before fetching.
    pub force_refresh: bool,
}

impl RefreshOptions {
    pub fn forced() -> Self {
        Self {
            force_refresh: true,
        }
    }
}

/// Everything the presenter needs for one render.
///
/// A source that failed is `None`; the others are unaffected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub github: Option<GitHubData>,
    pub medium: Option<Vec<ArticleSummary>>,
    pub linkedin: Option<StaticProfile>,
    pub fetched_at: DateTime<Utc>,
}

impl AggregatedResult {
    /// Result with every section missing, stamped now.
    pub fn unavailable() -> Self {
        Self {
            github: None,
            medium: None,
            linkedin: None,
            fetched_at: Utc::now(),
        }
    }

    pub fn is_available(&self, key: SourceKey) -> bool {
        match key {
            SourceKey::Github => self.github.is_some(),
            SourceKey::Medium => self.medium.is_some(),
            SourceKey::Linkedin => self.linkedin.is_some(),
        }
    }

    pub fn missing_sources(&self) -> Vec<SourceKey> {
        SourceKey::ALL
            .into_iter()
            .filter(|key| !self.is_available(*key))
            .collect()
    }
}

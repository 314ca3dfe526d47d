use tracing::debug;

use crate::api::{ApiClient, ApiError, ACCEPT_JSON};
use crate::models::{ArticleSummary, FeedItem, FeedResponse, SourceKey};

use super::{join_url, Source};

/// Articles from a Medium RSS feed, converted to JSON by an external service.
#[derive(Clone)]
pub struct MediumSource {
    client: ApiClient,
    api_base: String,
    feed_url: String,
}

impl MediumSource {
    pub fn new(client: ApiClient, api_base: impl Into<String>, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            feed_url: feed_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        join_url(&self.api_base, "v1/api.json")
    }
}

impl Source for MediumSource {
    const KEY: SourceKey = SourceKey::Medium;

    type Raw = Vec<FeedItem>;
    type Output = Vec<ArticleSummary>;

    async fn fetch_raw(&self) -> Result<Self::Raw, ApiError> {
        let feed: FeedResponse = self
            .client
            .get_json(&self.endpoint(), &[("rss_url", self.feed_url.as_str())], ACCEPT_JSON)
            .await?;

        if !feed.is_ok() {
            let detail = match feed.message {
                Some(message) => format!("{} ({})", feed.status, message),
                None => feed.status,
            };
            return Err(ApiError::FeedStatus(detail));
        }

        debug!(count = feed.items.len(), "Feed items received");
        Ok(feed.items)
    }

    fn normalize(items: Self::Raw) -> Vec<ArticleSummary> {
        items.into_iter().map(ArticleSummary::from).collect()
    }
}

//! HTTP client shared by the GitHub and Medium sources.
//!
//! Wraps a single `reqwest::Client` so both sources share one connection
//! pool. Every request is a read-only GET; responses are checked for a
//! success status and decoded from JSON, mapping each failure onto
//! [`ApiError`].

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ApiError;

/// User agent sent with every request. GitHub rejects requests without one.
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Accept header for plain JSON endpoints.
pub const ACCEPT_JSON: &str = "application/json";

/// Accept header recommended by the GitHub REST API.
pub const ACCEPT_GITHUB: &str = "application/vnd.github+json";

/// HTTP client for the upstream APIs.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a new client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// GET `url` with the given query parameters and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        accept: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        debug!(url = url, bytes = text.len(), "Response received");

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON from {}: {}", url, e))
        })
    }
}

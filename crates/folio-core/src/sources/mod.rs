//! Upstream data sources.
//!
//! Network-backed sources implement [`Source`]: fetch the raw payload, then
//! normalize it into the shape that is cached and handed to the presenter.
//! The fetcher drives every `Source` through the same read-through cache
//! path, so a source only describes its endpoints and its mapping.
//!
//! LinkedIn has no public API; [`LinkedInSource`] returns compiled-in data
//! and bypasses the cache entirely.

pub mod github;
pub mod linkedin;
pub mod medium;

use serde::{de::DeserializeOwned, Serialize};

use crate::api::ApiError;
use crate::models::SourceKey;

pub use github::GitHubSource;
pub use linkedin::LinkedInSource;
pub use medium::MediumSource;

// Sources are awaited on the caller's task, never spawned, so the returned
// futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait Source {
    /// Cache namespace for this source.
    const KEY: SourceKey;

    type Raw;
    type Output: Serialize + DeserializeOwned;

    async fn fetch_raw(&self) -> Result<Self::Raw, ApiError>;

    fn normalize(raw: Self::Raw) -> Self::Output;
}

/// Join a base URL and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

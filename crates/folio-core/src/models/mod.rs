//! Data models for the portfolio data sources.
//!
//! This module contains the raw API payloads and the normalized shapes
//! handed to the presenter:
//!
//! - `GitHubData`, `ProfileSummary`, `RepositorySummary`: GitHub profile and repos
//! - `ArticleSummary`: Medium articles from the feed conversion service
//! - `StaticProfile`: hand-maintained LinkedIn data
//! - `AggregatedResult`: one refresh worth of all three sections

pub mod aggregate;
pub mod github;
pub mod linkedin;
pub mod medium;
pub mod source;

pub use aggregate::{AggregatedResult, RefreshOptions};
pub use github::{GitHubData, GitHubRepo, GitHubUser, ProfileSummary, RepositorySummary};
pub use linkedin::{Engagement, LinkedInPost, LinkedInProfile, StaticProfile};
pub use medium::{ArticleSummary, FeedItem, FeedResponse};
pub use source::SourceKey;

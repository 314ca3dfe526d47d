//! GitHub REST payloads and their normalized summaries.
//!
//! `GitHubUser` and `GitHubRepo` mirror the subset of the
//! `/users/{username}` and `/users/{username}/repos` responses we consume.
//! `ProfileSummary` and `RepositorySummary` are the stable shapes handed to
//! the presenter and written to the cache.

use serde::{Deserialize, Serialize};

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub html_url: String,
    pub updated_at: String,
    // Older API previews omit topics entirely
    #[serde(default)]
    pub topics: Vec<String>,
}

// ============================================================================
// Normalized types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub avatar_url: String,
    pub html_url: String,
}

impl ProfileSummary {
    /// Display name, falling back to the login taken from the profile URL.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => self
                .html_url
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl From<GitHubUser> for ProfileSummary {
    fn from(user: GitHubUser) -> Self {
        Self {
            name: user.name,
            bio: user.bio,
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            avatar_url: user.avatar_url,
            html_url: user.html_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: String,
    pub topics: Vec<String>,
}

impl RepositorySummary {
    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or("Unknown")
    }
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language,
            url: repo.html_url,
            updated_at: repo.updated_at,
            topics: repo.topics,
        }
    }
}

/// Profile plus recently updated repositories, as cached under `github`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct GitHubData {
    pub profile: ProfileSummary,
    pub repositories: Vec<RepositorySummary>,
}

impl GitHubData {
    pub fn from_parts(user: GitHubUser, repos: Vec<GitHubRepo>) -> Self {
        Self {
            profile: user.into(),
            repositories: repos.into_iter().map(RepositorySummary::from).collect(),
        }
    }

    pub fn total_stars(&self) -> u64 {
        self.repositories.iter().map(|r| r.stars).sum()
    }
}

use crate::api::{ApiClient, ApiError, ACCEPT_GITHUB};
use crate::models::{GitHubData, GitHubRepo, GitHubUser, SourceKey};

use super::{join_url, Source};

/// Repositories requested per fetch, most recently updated first.
pub const REPOS_PER_PAGE: usize = 10;

/// Public profile and recent repositories of one GitHub user.
#[derive(Clone)]
pub struct GitHubSource {
    client: ApiClient,
    api_base: String,
    username: String,
}

impl GitHubSource {
    pub fn new(client: ApiClient, api_base: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn user_url(&self) -> String {
        join_url(&self.api_base, &format!("users/{}", self.username))
    }

    fn repos_url(&self) -> String {
        join_url(&self.api_base, &format!("users/{}/repos", self.username))
    }
}

impl Source for GitHubSource {
    const KEY: SourceKey = SourceKey::Github;

    type Raw = (GitHubUser, Vec<GitHubRepo>);
    type Output = GitHubData;

    /// Both requests go out together; either failing fails the pair.
    async fn fetch_raw(&self) -> Result<Self::Raw, ApiError> {
        let per_page = REPOS_PER_PAGE.to_string();
        let repos_query = [("sort", "updated"), ("per_page", per_page.as_str())];
        let user_url = self.user_url();
        let repos_url = self.repos_url();

        tokio::try_join!(
            self.client.get_json::<GitHubUser>(&user_url, &[], ACCEPT_GITHUB),
            self.client
                .get_json::<Vec<GitHubRepo>>(&repos_url, &repos_query, ACCEPT_GITHUB),
        )
    }

    fn normalize((user, mut repos): Self::Raw) -> GitHubData {
        repos.truncate(REPOS_PER_PAGE);
        GitHubData::from_parts(user, repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn repo(name: &str) -> GitHubRepo {
        serde_json::from_value(json!({
            "name": name,
            "description": null,
            "stargazers_count": 1,
            "forks_count": 0,
            "language": "Rust",
            "html_url": format!("https://github.com/x/{}", name),
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let client = ApiClient::new(Duration::from_secs(5)).unwrap();
        let source = GitHubSource::new(client, "https://api.github.com/", "octocat");
        assert_eq!(source.user_url(), "https://api.github.com/users/octocat");
        assert_eq!(source.repos_url(), "https://api.github.com/users/octocat/repos");
        assert_eq!(source.username(), "octocat");
    }

    #[test]
    fn test_normalize_caps_repository_count() {
        let user: GitHubUser = serde_json::from_value(json!({
            "name": null,
            "bio": null,
            "followers": 0,
            "following": 0,
            "public_repos": 12,
            "avatar_url": "a",
            "html_url": "https://github.com/x"
        }))
        .unwrap();
        let repos = (0..12).map(|i| repo(&format!("r{}", i))).collect();

        let data = GitHubSource::normalize((user, repos));
        assert_eq!(data.repositories.len(), REPOS_PER_PAGE);
        assert_eq!(data.repositories[0].name, "r0");
        assert_eq!(data.total_stars(), 10);
    }
}

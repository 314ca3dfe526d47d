//! Application configuration management.
//!
//! This module handles loading and saving the fetcher configuration: which
//! accounts to show, the cache TTL, request timeout and API base URLs.
//!
//! Configuration is stored at `~/.config/folio/config.json`. Every field
//! has a default, so a missing file or a partial file both load.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "folio";

/// Config file name
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_FEED_API_BASE: &str = "https://api.rss2json.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github_username: String,
    pub medium_username: String,
    pub linkedin_profile: String,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    pub github_api_base: String,
    pub feed_api_base: String,
    /// Overrides the platform cache directory.
    pub cache_dir: Option<PathBuf>,
    /// When set, logs are also written to daily files here.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_username: "namratesh".to_string(),
            medium_username: "namratesh".to_string(),
            linkedin_profile: "namratesh".to_string(),
            cache_ttl_secs: 60 * 60,
            request_timeout_secs: 30,
            github_api_base: DEFAULT_GITHUB_API_BASE.to_string(),
            feed_api_base: DEFAULT_FEED_API_BASE.to_string(),
            cache_dir: None,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// RSS feed URL of the Medium account, as passed to the conversion service.
    pub fn medium_feed_url(&self) -> String {
        format!("https://medium.com/@{}/feed", self.medium_username)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://www.linkedin.com/in/{}/", self.linkedin_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"github_username": "octocat", "cache_ttl_secs": 60}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.medium_username, "namratesh");
        assert_eq!(config.github_api_base, DEFAULT_GITHUB_API_BASE);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.json");
        let config = Config {
            medium_username: "writer".to_string(),
            cache_dir: Some(temp_dir.path().join("cache")),
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.cache_dir().unwrap(), temp_dir.path().join("cache"));
    }

    #[test]
    fn test_derived_urls() {
        let config = Config::default();
        assert_eq!(config.medium_feed_url(), "https://medium.com/@namratesh/feed");
        assert_eq!(config.linkedin_url(), "https://www.linkedin.com/in/namratesh/");
    }
}

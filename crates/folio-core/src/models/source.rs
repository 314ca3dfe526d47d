use serde::{Deserialize, Serialize};

/// Identifies one of the three upstream data providers.
///
/// The lowercase name doubles as the cache namespace for that provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SourceKey {
    Github,
    Medium,
    Linkedin,
}

impl SourceKey {
    pub const ALL: [SourceKey; 3] = [SourceKey::Github, SourceKey::Medium, SourceKey::Linkedin];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKey::Github => "github",
            SourceKey::Medium => "medium",
            SourceKey::Linkedin => "linkedin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKey::Github => "GitHub",
            SourceKey::Medium => "Medium",
            SourceKey::Linkedin => "LinkedIn",
        }
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

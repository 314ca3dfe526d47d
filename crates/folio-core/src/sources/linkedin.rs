use chrono::NaiveDate;

use crate::models::{Engagement, LinkedInPost, LinkedInProfile, StaticProfile};

/// Hand-maintained profile shown in place of a LinkedIn API.
#[derive(Debug, Clone)]
pub struct LinkedInSource {
    profile_url: String,
}

impl LinkedInSource {
    pub fn new(profile_url: impl Into<String>) -> Self {
        Self {
            profile_url: profile_url.into(),
        }
    }

    /// Update the entries below when the LinkedIn profile changes.
    pub fn profile(&self) -> StaticProfile {
        StaticProfile {
            profile: LinkedInProfile {
                name: "Namratesh Shrivastav".to_string(),
                headline: "Data Scientist & Generative AI Expert".to_string(),
                url: self.profile_url.clone(),
                connections: "500+".to_string(),
                location: "India".to_string(),
            },
            recent_posts: vec![LinkedInPost {
                title: "Update this with your latest LinkedIn post".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
                engagement: Engagement {
                    likes: 0,
                    comments: 0,
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_is_constant() {
        let source = LinkedInSource::new("https://www.linkedin.com/in/someone/");
        let first = source.profile();
        assert_eq!(first, source.profile());
        assert_eq!(first.profile.url, "https://www.linkedin.com/in/someone/");
        assert!(!first.recent_posts.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(LinkedInSource::new("u").profile()).unwrap();
        assert_eq!(json["profile"]["connections"], "500+");
        assert_eq!(json["recentPosts"][0]["date"], "2025-01-01");
        assert_eq!(
            json["recentPosts"][0]["title"],
            "Update this with your latest LinkedIn post"
        );
        assert_eq!(json["recentPosts"][0]["engagement"]["likes"], 0);
    }
}

//! Medium feed payloads (via the RSS-to-JSON service) and article summaries.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{estimate_read_time, excerpt};

/// Maximum characters of plain text kept in an article description.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Timestamp layout used by the feed conversion service for `pubDate`.
const FEED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// API response types
// ============================================================================

/// Envelope returned by `/v1/api.json`. Only `status == "ok"` carries items.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

impl FeedResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
    #[serde(rename = "pubDate", default)]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Normalized types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub title: String,
    pub description: String,
    pub link: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
    pub categories: Vec<String>,
    pub author: Option<String>,
    pub read_time: String,
}

impl ArticleSummary {
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

impl From<FeedItem> for ArticleSummary {
    fn from(item: FeedItem) -> Self {
        Self {
            description: excerpt(&item.description, DESCRIPTION_MAX_CHARS),
            read_time: estimate_read_time(&item.content),
            pub_date: item.pub_date.as_deref().and_then(parse_pub_date),
            title: item.title,
            link: item.link,
            thumbnail: item.thumbnail.filter(|t| !t.is_empty()),
            categories: item.categories,
            author: item.author,
        }
    }
}

/// Parse a feed publish date. The conversion service emits
/// `YYYY-MM-DD HH:MM:SS` in UTC; RFC 3339 and RFC 2822 are accepted too.
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, FEED_DATE_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn item(description: &str, content: &str) -> FeedItem {
        serde_json::from_value(json!({
            "title": "Post",
            "description": description,
            "link": "https://medium.com/@x/post",
            "pubDate": "2024-03-05 08:15:00",
            "thumbnail": "https://cdn/img.png",
            "categories": ["rust", "ai"],
            "author": "X",
            "content": content
        }))
        .unwrap()
    }

    #[test]
    fn test_normalizes_feed_item() {
        let words = vec!["word"; 400].join(" ");
        let description = "d".repeat(300);
        let article = ArticleSummary::from(item(&description, &words));

        assert_eq!(article.read_time, "2 min read");
        assert_eq!(article.description, format!("{}...", "d".repeat(200)));
        assert_eq!(
            article.pub_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 8, 15, 0).unwrap())
        );
        assert_eq!(article.primary_category(), Some("rust"));
        assert_eq!(article.author.as_deref(), Some("X"));
    }

    #[test]
    fn test_description_html_is_stripped() {
        let article = ArticleSummary::from(item(
            "<figure><img src=\"a.png\"></figure><p>Intro &amp; more</p>",
            "<p>body</p>",
        ));
        assert_eq!(article.description, "Intro & more...");
        assert_eq!(article.read_time, "1 min read");
    }

    #[test]
    fn test_missing_optional_fields() {
        let item: FeedItem = serde_json::from_value(json!({
            "title": "Bare",
            "link": "https://medium.com/@x/bare",
            "thumbnail": ""
        }))
        .unwrap();
        let article = ArticleSummary::from(item);
        assert!(article.pub_date.is_none());
        assert!(article.thumbnail.is_none());
        assert!(article.categories.is_empty());
        assert_eq!(article.description, "...");
    }

    #[test]
    fn test_parse_pub_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(parse_pub_date("2024-01-01 12:00:00"), Some(expected));
        assert_eq!(parse_pub_date("2024-01-01T12:00:00Z"), Some(expected));
        assert_eq!(parse_pub_date("Mon, 01 Jan 2024 12:00:00 GMT"), Some(expected));
        assert_eq!(parse_pub_date("yesterday"), None);
    }

    #[test]
    fn test_error_envelope_without_items() {
        let feed: FeedResponse =
            serde_json::from_value(json!({"status": "error", "message": "rss_url not valid"}))
                .unwrap();
        assert!(!feed.is_ok());
        assert!(feed.items.is_empty());
    }
}

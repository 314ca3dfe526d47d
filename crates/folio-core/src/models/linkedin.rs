//! Hand-maintained LinkedIn profile data.
//!
//! LinkedIn offers no public API, so this section is compiled into the
//! program and edited by hand when the profile changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct LinkedInProfile {
    pub name: String,
    pub headline: String,
    pub url: String,
    pub connections: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct LinkedInPost {
    pub title: String,
    pub date: NaiveDate,
    pub engagement: Engagement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct StaticProfile {
    pub profile: LinkedInProfile,
    pub recent_posts: Vec<LinkedInPost>,
}

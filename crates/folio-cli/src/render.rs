//! Plain-text rendering of fetched portfolio data.
//!
//! Each section renders independently; a source that failed to load shows
//! as unavailable without affecting the others.

use folio_core::cache::CacheAge;
use folio_core::models::{ArticleSummary, GitHubData, StaticProfile};
use folio_core::utils::{format_count, format_date, truncate_string};
use folio_core::{AggregatedResult, SourceKey};

/// Articles shown in the Medium section
const MAX_ARTICLES: usize = 6;

/// Width repository descriptions are cut to
const DESCRIPTION_WIDTH: usize = 72;

pub fn render_result(result: &AggregatedResult) -> String {
    let mut lines = vec![format!(
        "Portfolio data (fetched {})",
        result.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    )];

    lines.push(String::new());
    lines.extend(section(SourceKey::Github, result.github.as_ref(), github_lines));
    lines.push(String::new());
    lines.extend(section(SourceKey::Medium, result.medium.as_deref(), medium_lines));
    lines.push(String::new());
    lines.extend(section(SourceKey::Linkedin, result.linkedin.as_ref(), linkedin_lines));

    lines.join("\n")
}

fn section<T: ?Sized>(
    key: SourceKey,
    data: Option<&T>,
    body: impl FnOnce(&T) -> Vec<String>,
) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", key.display_name())];
    match data {
        Some(data) => lines.extend(body(data)),
        None => lines.push("  (unavailable)".to_string()),
    }
    lines
}

fn github_lines(data: &GitHubData) -> Vec<String> {
    let profile = &data.profile;
    let mut lines = vec![format!("  {} <{}>", profile.display_name(), profile.html_url)];
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
        lines.push(format!("  {}", bio));
    }
    lines.push(format!(
        "  {} followers | {} following | {} public repos | {} stars",
        format_count(profile.followers),
        format_count(profile.following),
        profile.public_repos,
        format_count(data.total_stars()),
    ));

    if data.repositories.is_empty() {
        lines.push("  No public repositories".to_string());
    }
    for repo in &data.repositories {
        lines.push(format!(
            "  - {} [{}] *{} forks:{} updated {}",
            repo.name,
            repo.display_language(),
            repo.stars,
            repo.forks,
            format_date(&repo.updated_at),
        ));
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("      {}", truncate_string(description, DESCRIPTION_WIDTH)));
        }
    }
    lines
}

fn medium_lines(articles: &[ArticleSummary]) -> Vec<String> {
    if articles.is_empty() {
        return vec!["  No articles published yet".to_string()];
    }

    let mut lines = Vec::new();
    for article in articles.iter().take(MAX_ARTICLES) {
        let date = article
            .pub_date
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| "undated".to_string());
        lines.push(format!("  - {} ({}, {})", article.title, date, article.read_time));
        lines.push(format!("      {}", article.link));
        if !article.categories.is_empty() {
            lines.push(format!("      tags: {}", article.categories.join(", ")));
        }
    }
    if articles.len() > MAX_ARTICLES {
        lines.push(format!("  ... and {} more", articles.len() - MAX_ARTICLES));
    }
    lines
}

fn linkedin_lines(data: &StaticProfile) -> Vec<String> {
    let profile = &data.profile;
    let mut lines = vec![
        format!("  {} - {}", profile.name, profile.headline),
        format!("  {} | {} connections | {}", profile.location, profile.connections, profile.url),
    ];
    for post in &data.recent_posts {
        lines.push(format!(
            "  - {} ({}, {} likes, {} comments)",
            post.title,
            post.date.format("%b %d, %Y"),
            post.engagement.likes,
            post.engagement.comments,
        ));
    }
    lines
}

pub fn render_status(status: &[(SourceKey, Option<CacheAge>)]) -> String {
    status
        .iter()
        .map(|(key, age)| {
            let state = match age {
                Some(age) if age.expired => format!("expired ({})", age.age_display()),
                Some(age) => format!("cached {}", age.age_display()),
                None => "not cached".to_string(),
            };
            format!("{:<10} {}", key.display_name(), state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

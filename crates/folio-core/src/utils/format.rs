use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Reading speed used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Marker appended to truncated excerpts
pub const ELLIPSIS: &str = "...";

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap()
});

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

// Only `<` followed by a letter, `/` or `!` opens a tag; "a < b" stays text
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-zA-Z!][^>]*>").unwrap());

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip HTML markup and return the plain text content.
///
/// Drops `<script>`/`<style>` bodies and comments, removes every tag,
/// decodes common entities and collapses whitespace runs to single spaces.
pub fn strip_html(html: &str) -> String {
    let text = SCRIPT_STYLE_RE.replace_all(html, " ");
    let text = COMMENT_RE.replace_all(&text, " ");
    // Tags become a space so adjacent blocks don't fuse their words
    let text = TAG_RE.replace_all(&text, " ");
    let text = decode_entities(&text);
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        "copy" => '©',
        _ => return None,
    };
    Some(c)
}

/// Take the first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Plain-text excerpt of an HTML fragment: first `max_chars` characters
/// followed by [`ELLIPSIS`]. The marker is always appended.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    format!("{}{}", truncate_chars(&strip_html(html), max_chars), ELLIPSIS)
}

/// Estimate reading time of an HTML document, e.g. "3 min read".
/// Never reports less than one minute.
pub fn estimate_read_time(html: &str) -> String {
    let words = strip_html(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}{}", truncated, ELLIPSIS)
    }
}

/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    // Try to parse ISO format and convert to readable
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(d) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        d.format("%b %d, %Y").to_string()
    } else {
        date.to_string()
    }
}

/// Compact count for stars/followers: 950 -> "950", 1500 -> "1.5k"
pub fn format_count(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => compact(n as f64 / 1_000.0, "k"),
        _ => compact(n as f64 / 1_000_000.0, "M"),
    }
}

fn compact(value: f64, suffix: &str) -> String {
    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", trimmed, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html("plain"), "plain");
        assert_eq!(strip_html(""), "");
    }

    #[test]
    fn test_strip_html_separates_blocks() {
        assert_eq!(strip_html("<p>one</p><p>two</p>"), "one two");
        assert_eq!(strip_html("line<br/>break"), "line break");
    }

    #[test]
    fn test_strip_html_drops_script_style_and_comments() {
        let html = "<style>.a{color:red}</style>Text<script>alert('x')</script><!-- note -->";
        assert_eq!(strip_html(html), "Text");
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(strip_html("&lt;b&gt; is a tag"), "<b> is a tag");
        assert_eq!(strip_html("it&#39;s &#x41;"), "it's A");
        assert_eq!(strip_html("&bogus; stays"), "&bogus; stays");
    }

    #[test]
    fn test_strip_html_keeps_lone_angle_bracket() {
        assert_eq!(strip_html("a < b and c > d"), "a < b and c > d");
    }

    #[test]
    fn test_excerpt_truncates_to_limit_plus_ellipsis() {
        let text = "x".repeat(300);
        let result = excerpt(&text, 200);
        assert_eq!(result.chars().count(), 203);
        assert!(result.ends_with("..."));
        assert_eq!(&result[..200], "x".repeat(200));
    }

    #[test]
    fn test_excerpt_short_text_still_gets_marker() {
        assert_eq!(excerpt("<p>Short</p>", 200), "Short...");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }

    #[test]
    fn test_estimate_read_time() {
        let content = "one two three ".repeat(133) + "four";
        // 400 words
        assert_eq!(content.split_whitespace().count(), 400);
        assert_eq!(estimate_read_time(&content), "2 min read");

        let content = "word ".repeat(401);
        assert_eq!(estimate_read_time(&content), "3 min read");

        assert_eq!(estimate_read_time("<p>short post</p>"), "1 min read");
        assert_eq!(estimate_read_time(""), "1 min read");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_date("2024-01-01"), "Jan 01, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1000), "1k");
        assert_eq!(format_count(1500), "1.5k");
        assert_eq!(format_count(2_300_000), "2.3M");
    }
}

//! Utility functions for string formatting and manipulation.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{
    estimate_read_time, excerpt, format_count, format_date, strip_html, truncate_chars,
    truncate_string,
};

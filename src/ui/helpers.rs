//! Helper functions and constants for UI rendering.

use chrono::DateTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the submit indicator.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner frame for a tick counter.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Truncate `text` to at most `max_width` terminal columns, appending an
/// ellipsis when something was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Format a wire timestamp as a short date. Falls back to the raw string
/// when the backend sends something unparseable.
pub fn format_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Render a ratio like `0.153` as `15.3%`.
pub fn format_ratio_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Render an already-scaled percentage like `83.3` as `83.3%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // CJK chars are two columns wide.
        let truncated = truncate_to_width("日本語テキスト", 7);
        assert_eq!(truncated, "日本語…");
    }

    #[test]
    fn test_format_created_at_rfc3339() {
        assert_eq!(
            format_created_at("2025-06-01T12:34:56Z"),
            "2025-06-01"
        );
        assert_eq!(
            format_created_at("2025-06-01T12:34:56+02:00"),
            "2025-06-01"
        );
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }

    #[test]
    fn test_percent_formats() {
        assert_eq!(format_ratio_percent(0.153), "15.3%");
        assert_eq!(format_percent(83.25), "83.2%");
    }

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(10), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(13), SPINNER_FRAMES[3]);
    }
}

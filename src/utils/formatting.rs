//! Formatting utilities used for CLI and markdown outputs.

use ansi_term::Style;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Pad with spaces on the right up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Pad with spaces on the left up to `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Round to the nearest whole second; exact halves round up.
pub fn round_to_second(d: Duration) -> Duration {
    let secs = d.as_secs();
    if d.subsec_millis() >= 500 {
        Duration::from_secs(secs + 1)
    } else {
        Duration::from_secs(secs)
    }
}

/// Compact duration as written in the daily log, rounded to the second.
///
/// - `3725s` → `1h2m5s`
/// - `65s`   → `1m5s`
/// - `9s`    → `9s`
pub fn format_duration(d: Duration) -> String {
    let total = round_to_second(d).as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

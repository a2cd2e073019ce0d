//! Formatting utilities used for CLI and export outputs.

use chrono::Duration;
use unicode_width::UnicodeWidthStr;

/// Render a chrono duration as `2h 05m`.
pub fn duration_readable(elapsed: Duration) -> String {
    let total_mins = elapsed.num_minutes();
    let sign = if total_mins < 0 { "-" } else { "" };
    let abs_m = total_mins.abs();

    format!("{}{}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Render fractional hours the way aggregate queries report them.
pub fn hours_readable(hours: f64) -> String {
    format!("{hours:.2} h")
}

/// Pad to a display width, accounting for wide glyphs in usernames.
pub fn pad_display(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Rank marker for leaderboard rows: medals for the podium, plain
/// numbers below it.
pub fn rank_marker(position: usize) -> String {
    match position {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("{n:2}."),
    }
}

//! Time utilities: parsing HH:MM into minutes since midnight, formatting minutes.

use chrono::NaiveTime;

/// Parse a clock time (`HH:MM`) into minutes since midnight.
///
/// Empty input, a missing `:`, a non numeric part or a value that does not
/// fit in `i64` yield `None`.
/// Hour and minute ranges are NOT checked: `25:99` gives `1599`.
/// Use [`is_valid_clock_time`] to detect such values.
pub fn parse_clock_time(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (h, m) = text.split_once(':')?;
    let hours: i64 = h.trim().parse().ok()?;
    let minutes: i64 = m.trim().parse().ok()?;

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Strict `HH:MM` check (00:00 ..= 23:59).
pub fn is_valid_clock_time(text: &str) -> bool {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").is_ok()
}

/// Format a non-negative amount of minutes as zero padded `HH:MM`.
///
/// Hours are not wrapped at 24, a whole week prints e.g. `41:30`.
pub fn format_minutes(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}

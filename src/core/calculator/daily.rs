//! Worked time of a single row.

use crate::models::{DayEntry, RowResult};
use crate::utils::time::{format_minutes, parse_clock_time};

/// Break minutes as typed in the "Pause" column.
///
/// Leading integer part only; empty, unparseable or negative input counts as 0.
pub fn parse_break(text: &str) -> i64 {
    let t = text.trim();
    let digits_end = t
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(t.len());

    t[..digits_end].parse::<i64>().unwrap_or(0).max(0)
}

/// Worked minutes of a row: `max(0, end - start - break)`.
///
/// `None` when start or end is missing. An end before the start, or a break
/// longer than the span, yields 0 rather than a negative duration.
pub fn worked_minutes(entry: &DayEntry) -> Option<i64> {
    let start = parse_clock_time(&entry.start)?;
    let end = parse_clock_time(&entry.end)?;
    let pause = parse_break(&entry.pause);

    Some(end.saturating_sub(start).saturating_sub(pause).max(0))
}

pub fn row_result(entry: &DayEntry) -> RowResult {
    let worked = worked_minutes(entry);
    RowResult {
        day: entry.day,
        worked_minutes: worked,
        duration_text: worked.map(format_minutes).unwrap_or_default(),
    }
}

use chrono::{Datelike, NaiveDate, TimeDelta};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// ISO-8601 week number of `date`.
///
/// The week belongs to the year of its Thursday: shift the date to the
/// Thursday of the same Monday-based week, then count the days since
/// January 1st of that Thursday's year. Same result as
/// `chrono::NaiveDate::iso_week().week()`.
pub fn iso_week(date: NaiveDate) -> u32 {
    let dow = date.weekday().number_from_monday() as i64;
    let thursday = date + TimeDelta::days(4 - dow);

    let days_since_jan1 = thursday.ordinal0() as i64;

    // ceil((days + 1) / 7)
    ((days_since_jan1 + 1 + 6) / 7) as u32
}

/// Monday and Saturday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_monday() as i64;
    let monday = date - TimeDelta::days(offset);
    let saturday = monday + TimeDelta::days(5);
    (monday, saturday)
}

/// German short date as used on the paper form (`dd.mm.yyyy`).
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

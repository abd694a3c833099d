use wochenbericht::core::calculator::{
    compute_totals, format_expense, parse_break, parse_expense, worked_minutes,
};
use wochenbericht::core::form::{AppState, FormEvent, reduce};
use wochenbericht::models::{DayEntry, FieldId, Weekday, WeeklyReport};
use wochenbericht::utils::time::{format_minutes, is_valid_clock_time, parse_clock_time};

fn entry(start: &str, pause: &str, end: &str) -> DayEntry {
    let mut e = DayEntry::empty(Weekday::Monday);
    e.start = start.into();
    e.pause = pause.into();
    e.end = end.into();
    e
}

#[test]
fn test_parse_clock_time() {
    assert_eq!(parse_clock_time("08:00"), Some(480));
    assert_eq!(parse_clock_time(" 16:30 "), Some(990));
    assert_eq!(parse_clock_time(""), None);
    assert_eq!(parse_clock_time("0800"), None);
    assert_eq!(parse_clock_time("ab:cd"), None);
    // ranges are not checked
    assert_eq!(parse_clock_time("25:99"), Some(25 * 60 + 99));
    assert!(!is_valid_clock_time("25:99"));
    assert!(is_valid_clock_time("23:59"));
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(480), "08:00");
    assert_eq!(format_minutes(2490), "41:30");
    assert_eq!(format_minutes(-15), "00:00");
}

#[test]
fn test_parse_break() {
    assert_eq!(parse_break("30"), 30);
    assert_eq!(parse_break(" 45min"), 45);
    assert_eq!(parse_break(""), 0);
    assert_eq!(parse_break("abc"), 0);
    assert_eq!(parse_break("-20"), 0);
}

#[test]
fn test_worked_minutes_regular_day() {
    let e = entry("08:00", "30", "16:30");
    assert_eq!(worked_minutes(&e), Some(480));
}

#[test]
fn test_worked_minutes_clamped_to_zero() {
    // end before start
    assert_eq!(worked_minutes(&entry("09:00", "", "08:00")), Some(0));
    // break longer than the span
    assert_eq!(worked_minutes(&entry("09:00", "30", "09:20")), Some(0));
}

#[test]
fn test_worked_minutes_incomplete_row() {
    assert_eq!(worked_minutes(&entry("08:00", "30", "")), None);
    assert_eq!(worked_minutes(&entry("", "30", "16:00")), None);
}

#[test]
fn test_parse_expense() {
    assert_eq!(parse_expense("12,50"), Some(12.5));
    assert_eq!(parse_expense("7.5"), Some(7.5));
    assert_eq!(parse_expense("7.5 EUR"), Some(7.5));
    assert_eq!(parse_expense("1,2,3"), Some(1.2));
    assert_eq!(parse_expense("abc"), None);
    assert_eq!(parse_expense(""), None);
}

#[test]
fn test_format_expense() {
    assert_eq!(format_expense(20.0, "€"), "20,00 €");
    assert_eq!(format_expense(0.0, "€"), "0,00 €");
    assert_eq!(format_expense(3.456, ""), "3,46");
}

#[test]
fn test_compute_totals_for_week() {
    let mut report = WeeklyReport::empty(42);
    report.set_field(FieldId::Start(0), "08:00");
    report.set_field(FieldId::Pause(0), "30");
    report.set_field(FieldId::End(0), "16:30");
    report.set_field(FieldId::Expense(0), "12,50");
    report.set_field(FieldId::Start(1), "07:00");
    report.set_field(FieldId::End(1), "12:15");
    report.set_field(FieldId::Expense(1), "7,50");
    report.set_field(FieldId::Expense(2), "abc");
    // incomplete row, not counted
    report.set_field(FieldId::Start(3), "06:00");

    let totals = compute_totals(&report);

    assert_eq!(totals.rows.len(), 6);
    assert_eq!(totals.rows[0].duration_text, "08:00");
    assert_eq!(totals.rows[1].duration_text, "05:15");
    assert_eq!(totals.rows[3].worked_minutes, None);
    assert_eq!(totals.rows[3].duration_text, "");
    assert_eq!(totals.total_minutes, 480 + 315);
    assert_eq!(format_expense(totals.total_expense, "€"), "20,00 €");
}

#[test]
fn test_reduce_recomputes_totals() {
    let state = AppState::new(WeeklyReport::empty(1));
    let state = reduce(state, FormEvent::SetField(FieldId::Start(4), "10:00".into()));
    let state = reduce(state, FormEvent::SetField(FieldId::End(4), "12:00".into()));

    assert_eq!(state.totals.rows[4].duration_text, "02:00");
    assert_eq!(state.totals.total_minutes, 120);

    let state = reduce(state, FormEvent::Reset);
    assert_eq!(state.report.week_number, 1);
    assert_eq!(state.report.field(FieldId::Start(4)), "");
    assert_eq!(state.totals.total_minutes, 0);
}

#[test]
fn test_field_keys() {
    assert_eq!(FieldId::Expense(3).key(), "spesen-3");
    assert_eq!(FieldId::parse("start-0").unwrap(), FieldId::Start(0));
    assert_eq!(FieldId::parse("Name").unwrap(), FieldId::Name);
    assert!(FieldId::parse("start-6").is_err());
    assert!(FieldId::parse("lunch-1").is_err());
    assert_eq!(FieldId::all().len(), 3 + 6 * 5);
}

#[test]
fn test_weekday_input() {
    assert_eq!(Weekday::from_input("Montag").unwrap(), Weekday::Monday);
    assert_eq!(Weekday::from_input("do").unwrap(), Weekday::Thursday);
    assert_eq!(Weekday::from_input("saturday").unwrap(), Weekday::Saturday);
    assert_eq!(Weekday::from_input("1").unwrap(), Weekday::Tuesday);
    assert!(Weekday::from_input("6").is_err());
    assert!(Weekday::from_input("sonntag").is_err());
}

#[test]
fn test_huge_clock_values_are_absent() {
    assert_eq!(parse_clock_time("999999999999999999:00"), None);
    assert_eq!(parse_clock_time("00:99999999999999999999"), None);
    assert_eq!(worked_minutes(&entry("999999999999999999:00", "", "08:00")), None);
}

#[test]
fn test_huge_break_does_not_overflow() {
    let e = entry("09:00", "9223372036854775807", "08:00");
    assert_eq!(worked_minutes(&e), Some(0));

    let e = entry("-153722867280912930:00", "", "153722867280912930:00");
    assert_eq!(worked_minutes(&e), Some(i64::MAX));
}

#[test]
fn test_week_total_saturates() {
    let mut report = WeeklyReport::empty(1);
    for i in 0..2 {
        report.set_field(FieldId::Start(i), "-153722867280912930:00");
        report.set_field(FieldId::End(i), "153722867280912930:00");
    }

    let totals = compute_totals(&report);
    assert_eq!(totals.total_minutes, i64::MAX);
}

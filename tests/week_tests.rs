use chrono::{Datelike, NaiveDate, TimeDelta};
use predicates::str::contains;
use wochenbericht::utils::date::{format_short, iso_week, week_bounds};

mod common;
use common::wb;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_iso_week_year_boundaries() {
    assert_eq!(iso_week(d(2021, 1, 1)), 53);
    assert_eq!(iso_week(d(2022, 1, 1)), 52);
    assert_eq!(iso_week(d(2023, 1, 1)), 52);
    assert_eq!(iso_week(d(2026, 1, 1)), 1);
    assert_eq!(iso_week(d(2024, 12, 30)), 1);
    assert_eq!(iso_week(d(2020, 12, 31)), 53);
}

#[test]
fn test_iso_week_matches_chrono_over_several_years() {
    let mut day = d(2019, 12, 1);
    let end = d(2027, 2, 1);
    while day < end {
        assert_eq!(iso_week(day), day.iso_week().week(), "mismatch on {day}");
        day += TimeDelta::days(1);
    }
}

#[test]
fn test_week_bounds_monday_to_saturday() {
    // Thursday
    let (mon, sat) = week_bounds(d(2026, 10, 22));
    assert_eq!(mon, d(2026, 10, 19));
    assert_eq!(sat, d(2026, 10, 24));
    assert_eq!(format_short(mon), "19.10.2026");

    // Sunday belongs to the week that started six days earlier
    let (mon, _) = week_bounds(d(2026, 10, 25));
    assert_eq!(mon, d(2026, 10, 19));
}

#[test]
fn test_week_command() {
    wb()
        .args(["week", "--date", "2021-01-01"])
        .assert()
        .success()
        .stdout(contains("KW 53"))
        .stdout(contains("28.12.2020 - 02.01.2021"));
}

#[test]
fn test_week_command_rejects_bad_date() {
    wb()
        .args(["week", "--date", "2021-13-01"])
        .assert()
        .failure();
}

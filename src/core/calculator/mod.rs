//! Daily and weekly totals of the form.

pub mod daily;
pub mod expense;

pub use daily::{parse_break, row_result, worked_minutes};
pub use expense::{format_expense, parse_expense};

use crate::models::{ComputedTotals, WeeklyReport};

/// Full recompute over the six rows.
pub fn compute_totals(report: &WeeklyReport) -> ComputedTotals {
    let rows: Vec<_> = report.days.iter().map(row_result).collect();

    let total_minutes = rows
        .iter()
        .filter_map(|r| r.worked_minutes)
        .fold(0i64, i64::saturating_add);
    let total_expense: f64 = report
        .days
        .iter()
        .filter_map(|d| parse_expense(&d.expense))
        .sum();

    ComputedTotals {
        rows,
        total_minutes,
        total_expense,
    }
}

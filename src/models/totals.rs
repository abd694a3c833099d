use crate::models::weekday::Weekday;

/// Result shown in the "Std." column of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowResult {
    pub day: Weekday,
    /// `None` when start or end is missing.
    pub worked_minutes: Option<i64>,
    /// Empty when incomplete, `HH:MM` otherwise.
    pub duration_text: String,
}

/// Derived totals. Never persisted, always recomputed from the rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedTotals {
    pub rows: Vec<RowResult>,
    pub total_minutes: i64,
    pub total_expense: f64,
}

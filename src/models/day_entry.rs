use crate::models::weekday::Weekday;

/// One row of the weekly form.
///
/// Every value is kept as the raw text the user typed, so that a saved
/// report restores exactly what was entered. Numeric views are derived by
/// the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub day: Weekday,
    pub start: String,
    pub pause: String,
    pub end: String,
    pub tour: String,
    pub expense: String,
}

impl DayEntry {
    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            start: String::new(),
            pause: String::new(),
            end: String::new(),
            tour: String::new(),
            expense: String::new(),
        }
    }

    /// True when the row carries something worth reporting in a summary.
    pub fn has_content(&self) -> bool {
        [&self.start, &self.end, &self.tour, &self.expense]
            .iter()
            .any(|v| !v.trim().is_empty())
    }
}

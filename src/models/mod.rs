pub mod day_entry;
pub mod field;
pub mod report;
pub mod totals;
pub mod weekday;

pub use day_entry::DayEntry;
pub use field::FieldId;
pub use report::WeeklyReport;
pub use totals::{ComputedTotals, RowResult};
pub use weekday::{DAYS_PER_WEEK, Weekday};

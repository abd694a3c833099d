use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Number of rows on the weekly form (Monday to Saturday).
pub const DAYS_PER_WEEK: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Label printed on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Montag",
            Weekday::Tuesday => "Dienstag",
            Weekday::Wednesday => "Mittwoch",
            Weekday::Thursday => "Donnerstag",
            Weekday::Friday => "Freitag",
            Weekday::Saturday => "Samstag",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    /// Row index on the form (0 = Montag).
    pub fn index(&self) -> usize {
        Weekday::ALL
            .iter()
            .position(|d| d == self)
            .unwrap_or_default()
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Weekday::ALL.get(idx).copied()
    }

    /// Helper: convert user input from CLI.
    ///
    /// Accepts the German label ("Montag"), its two-letter prefix ("mo"),
    /// the English name ("monday") or the row index ("0".."5").
    pub fn from_input(input: &str) -> AppResult<Self> {
        let s = input.trim().to_lowercase();

        if let Ok(idx) = s.parse::<usize>() {
            return Weekday::from_index(idx).ok_or_else(|| AppError::InvalidDay(input.to_string()));
        }

        Weekday::ALL
            .iter()
            .copied()
            .find(|d| {
                let label = d.label().to_lowercase();
                s == label || s == d.english() || (s.chars().count() == 2 && label.starts_with(&s))
            })
            .ok_or_else(|| AppError::InvalidDay(input.to_string()))
    }
}

use crate::models::day_entry::DayEntry;
use crate::models::field::FieldId;
use crate::models::weekday::Weekday;

/// The whole weekly form.
///
/// `signature` holds the PNG bytes of the captured signature.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReport {
    pub week_number: u32,
    pub reporter_name: String,
    pub period_start: String,
    pub period_end: String,
    pub days: Vec<DayEntry>,
    pub signature: Option<Vec<u8>>,
}

impl WeeklyReport {
    /// Empty report stamped with `week_number`, one row per weekday.
    pub fn empty(week_number: u32) -> Self {
        Self {
            week_number,
            reporter_name: String::new(),
            period_start: String::new(),
            period_end: String::new(),
            days: Weekday::ALL.iter().map(|d| DayEntry::empty(*d)).collect(),
            signature: None,
        }
    }

    /// Clear every field and the signature, keeping the week stamp.
    pub fn clear(&mut self) {
        *self = WeeklyReport::empty(self.week_number);
    }

    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.reporter_name,
            FieldId::From => &self.period_start,
            FieldId::To => &self.period_end,
            FieldId::Start(i) => &self.days[i].start,
            FieldId::Pause(i) => &self.days[i].pause,
            FieldId::End(i) => &self.days[i].end,
            FieldId::Tour(i) => &self.days[i].tour,
            FieldId::Expense(i) => &self.days[i].expense,
        }
    }

    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        let slot = match id {
            FieldId::Name => &mut self.reporter_name,
            FieldId::From => &mut self.period_start,
            FieldId::To => &mut self.period_end,
            FieldId::Start(i) => &mut self.days[i].start,
            FieldId::Pause(i) => &mut self.days[i].pause,
            FieldId::End(i) => &mut self.days[i].end,
            FieldId::Tour(i) => &mut self.days[i].tour,
            FieldId::Expense(i) => &mut self.days[i].expense,
        };
        *slot = value;
    }
}

use crate::errors::{AppError, AppResult};
use crate::models::weekday::DAYS_PER_WEEK;
use std::fmt;

/// Stable identifier of one input field of the form.
///
/// The textual form (`name`, `start-0`, `spesen-5`, ...) is the key used
/// in the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    From,
    To,
    Start(usize),
    Pause(usize),
    End(usize),
    Tour(usize),
    Expense(usize),
}

impl FieldId {
    /// Every field of the form, header first, then row by row.
    pub fn all() -> Vec<FieldId> {
        let mut out = vec![FieldId::Name, FieldId::From, FieldId::To];
        for i in 0..DAYS_PER_WEEK {
            out.extend([
                FieldId::Start(i),
                FieldId::Pause(i),
                FieldId::End(i),
                FieldId::Tour(i),
                FieldId::Expense(i),
            ]);
        }
        out
    }

    pub fn key(&self) -> String {
        match self {
            FieldId::Name => "name".into(),
            FieldId::From => "from".into(),
            FieldId::To => "to".into(),
            FieldId::Start(i) => format!("start-{i}"),
            FieldId::Pause(i) => format!("pause-{i}"),
            FieldId::End(i) => format!("end-{i}"),
            FieldId::Tour(i) => format!("tour-{i}"),
            FieldId::Expense(i) => format!("spesen-{i}"),
        }
    }

    pub fn parse(key: &str) -> AppResult<Self> {
        let k = key.trim().to_lowercase();

        match k.as_str() {
            "name" => return Ok(FieldId::Name),
            "from" => return Ok(FieldId::From),
            "to" => return Ok(FieldId::To),
            _ => {}
        }

        let (kind, idx) = k
            .rsplit_once('-')
            .ok_or_else(|| AppError::InvalidField(key.to_string()))?;

        let idx: usize = idx
            .parse()
            .map_err(|_| AppError::InvalidField(key.to_string()))?;

        if idx >= DAYS_PER_WEEK {
            return Err(AppError::InvalidField(key.to_string()));
        }

        match kind {
            "start" => Ok(FieldId::Start(idx)),
            "pause" => Ok(FieldId::Pause(idx)),
            "end" => Ok(FieldId::End(idx)),
            "tour" => Ok(FieldId::Tour(idx)),
            "spesen" => Ok(FieldId::Expense(idx)),
            _ => Err(AppError::InvalidField(key.to_string())),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

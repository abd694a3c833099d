use crate::errors::AppResult;
use crate::models::WeeklyReport;
use crate::store::{KvStore, PersistedRecord};
use crate::ui::messages::warning;
use crate::utils::date::iso_week;
use chrono::NaiveDate;

/// Key of the single record holding the whole report.
pub const STORAGE_KEY: &str = "wochenbericht";

/// What `load` found in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Same week: the saved fields were restored.
    Restored(WeeklyReport),
    /// Nothing saved yet.
    Fresh(WeeklyReport),
    /// The saved record belonged to another week and was purged.
    RolledOver {
        previous_week: u32,
        report: WeeklyReport,
    },
    /// The saved record could not be parsed and was purged.
    Discarded(WeeklyReport),
}

impl LoadOutcome {
    pub fn report(&self) -> &WeeklyReport {
        match self {
            LoadOutcome::Restored(r)
            | LoadOutcome::Fresh(r)
            | LoadOutcome::Discarded(r)
            | LoadOutcome::RolledOver { report: r, .. } => r,
        }
    }

    pub fn into_report(self) -> WeeklyReport {
        match self {
            LoadOutcome::Restored(r)
            | LoadOutcome::Fresh(r)
            | LoadOutcome::Discarded(r)
            | LoadOutcome::RolledOver { report: r, .. } => r,
        }
    }
}

/// Mirrors a [`WeeklyReport`] into a [`KvStore`].
pub struct Persistence<S: KvStore> {
    store: S,
}

impl<S: KvStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the whole report (week stamp included) as one record.
    pub fn save(&mut self, report: &WeeklyReport) -> AppResult<()> {
        let record = PersistedRecord::from_report(report);
        let json = serde_json::to_string(&record)?;
        self.store.set(STORAGE_KEY, &json)
    }

    /// Read the record for the week containing `today`.
    ///
    /// A record from another week, or one that does not parse, is removed
    /// and an empty report for the current week is returned instead. Only a
    /// failing read is an error; a failing removal is reported as a warning.
    pub fn load(&mut self, today: NaiveDate) -> AppResult<LoadOutcome> {
        let current_week = iso_week(today);

        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(LoadOutcome::Fresh(WeeklyReport::empty(current_week)));
        };

        let record: PersistedRecord = match serde_json::from_str(&raw) {
            Ok(r) => r,
            Err(_) => {
                self.purge();
                return Ok(LoadOutcome::Discarded(WeeklyReport::empty(current_week)));
            }
        };

        if record.week_number != current_week {
            self.purge();
            return Ok(LoadOutcome::RolledOver {
                previous_week: record.week_number,
                report: WeeklyReport::empty(current_week),
            });
        }

        let (mut report, signature) = record.to_report();
        match signature {
            Some(Ok(png)) => report.signature = Some(png),
            Some(Err(e)) => warning(format!("Saved signature ignored: {e}")),
            None => {}
        }

        Ok(LoadOutcome::Restored(report))
    }

    fn purge(&mut self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warning(format!("Old report could not be removed from storage: {e}"));
        }
    }
}

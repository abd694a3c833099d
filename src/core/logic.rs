use crate::core::form::FormSession;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::LoadOutcome;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Open the persisted report for the week containing `today`.
    ///
    /// Rollover and discarded records are reported to the user and to the
    /// internal log.
    pub fn open(pool: DbPool, today: NaiveDate) -> AppResult<FormSession<DbPool>> {
        let session = FormSession::open(pool, today)?;

        let note = match session.load_outcome() {
            LoadOutcome::RolledOver {
                previous_week,
                report,
            } => {
                let msg = format!(
                    "New week: KW {} data discarded, starting KW {}",
                    previous_week, report.week_number
                );
                info(&msg);
                Some(("rollover", msg))
            }
            LoadOutcome::Discarded(report) => {
                let msg = format!(
                    "Saved report was unreadable and has been discarded (KW {})",
                    report.week_number
                );
                warning(&msg);
                Some(("discard", msg))
            }
            LoadOutcome::Restored(_) | LoadOutcome::Fresh(_) => None,
        };

        if let Some((op, message)) = note {
            audit(session.persistence().store(), op, "report", &message);
        }
        Ok(session)
    }
}

use crate::core::form::{FormEvent, FormSession, SaveStatus};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::models::FieldId;
use crate::ui::messages::{success, warning};
use crate::utils::time::is_valid_clock_time;

pub struct EditLogic;

impl EditLogic {
    /// Apply field changes one by one, saving after each.
    ///
    /// Time fields that are not a real clock time are accepted as typed
    /// (they still count with their raw value) but flagged to the user.
    pub fn apply(session: &mut FormSession<DbPool>, changes: Vec<(FieldId, String)>) -> SaveStatus {
        let mut status = SaveStatus::Saved;

        for (id, value) in changes {
            if matches!(id, FieldId::Start(_) | FieldId::End(_))
                && !value.trim().is_empty()
                && !is_valid_clock_time(&value)
            {
                warning(format!("'{value}' is not a valid HH:MM time ({id})"));
            }

            let message = format!("{id} = '{value}'");
            status = session.dispatch(FormEvent::SetField(id, value));

            if status == SaveStatus::Saved {
                audit(session.persistence().store(), "set", &id.key(), &message);
            }
        }

        if status == SaveStatus::Saved {
            success("Report saved.");
        }
        status
    }

    pub fn reset(session: &mut FormSession<DbPool>) -> SaveStatus {
        let status = session.dispatch(FormEvent::Reset);
        if status == SaveStatus::Saved {
            audit(
                session.persistence().store(),
                "reset",
                "report",
                &format!("KW {} cleared", session.report().week_number),
            );
            success("Report cleared.");
        }
        status
    }
}

use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::{FieldId, Weekday};
use crate::ui::messages::{info, warning};

/// Fill in one row of the form.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        day,
        start,
        pause,
        end,
        tour,
        spesen,
    } = &cli.command
    {
        //
        // 1. Resolve the row
        //
        let d = Weekday::from_input(day)?;
        let i = d.index();

        //
        // 2. Collect the given fields, in form order
        //
        let changes: Vec<(FieldId, String)> = [
            (FieldId::Start(i), start),
            (FieldId::Pause(i), pause),
            (FieldId::End(i), end),
            (FieldId::Tour(i), tour),
            (FieldId::Expense(i), spesen),
        ]
        .into_iter()
        .filter_map(|(id, v)| v.clone().map(|v| (id, v)))
        .collect();

        if changes.is_empty() {
            warning(format!("Nothing to change for {}.", d.label()));
            return Ok(());
        }

        //
        // 3. Apply and show the resulting row
        //
        let mut session = open_session(cli, cfg)?;
        EditLogic::apply(&mut session, changes);

        let row = &session.totals().rows[i];
        let hours = if row.duration_text.is_empty() {
            "--:--"
        } else {
            row.duration_text.as_str()
        };
        info(format!("{}: {} h", d.label(), hours));
    }
    Ok(())
}

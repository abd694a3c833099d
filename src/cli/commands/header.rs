use crate::cli::commands::{effective_today, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::FieldId;
use crate::ui::messages::warning;
use crate::utils::date::{format_short, week_bounds};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Header {
        name,
        from,
        to,
        auto_period,
    } = &cli.command
    {
        let mut changes: Vec<(FieldId, String)> = Vec::new();

        if let Some(n) = name {
            changes.push((FieldId::Name, n.clone()));
        }

        if *auto_period {
            let (monday, saturday) = week_bounds(effective_today(cli)?);
            changes.push((FieldId::From, format_short(monday)));
            changes.push((FieldId::To, format_short(saturday)));
        } else {
            if let Some(f) = from {
                changes.push((FieldId::From, f.clone()));
            }
            if let Some(t) = to {
                changes.push((FieldId::To, t.clone()));
            }
        }

        if changes.is_empty() {
            warning("Nothing to change in the header.");
            return Ok(());
        }

        let mut session = open_session(cli, cfg)?;
        EditLogic::apply(&mut session, changes);
    }
    Ok(())
}

use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::FieldId;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { field, value } = &cli.command {
        // validate before touching the store
        let id = FieldId::parse(field)?;

        let mut session = open_session(cli, cfg)?;
        EditLogic::apply(&mut session, vec![(id, value.clone())]);
    }
    Ok(())
}

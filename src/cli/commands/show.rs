use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { plain } = &cli.command {
        let session = open_session(cli, cfg)?;
        print!("{}", ShowLogic::render(session.state(), cfg, !*plain));
    }
    Ok(())
}

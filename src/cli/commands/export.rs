use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        no_share,
    } = &cli.command
    {
        let session = open_session(cli, cfg)?;
        let path = ExportLogic::resolve_path(cfg, file.as_deref(), format);

        ExportLogic::export(
            session.state(),
            cfg,
            format.clone(),
            &path,
            *force,
            !*no_share,
        )?;

        audit(
            session.persistence().store(),
            "export",
            format.as_str(),
            &path.display().to_string(),
        );
    }
    Ok(())
}

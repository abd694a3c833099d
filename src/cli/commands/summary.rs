use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::text::{text_summary, whatsapp_link};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { link } = &cli.command {
        let session = open_session(cli, cfg)?;
        let text = text_summary(session.state(), cfg);

        if *link {
            println!("{}", whatsapp_link(&text));
        } else {
            println!("{text}");
        }
    }
    Ok(())
}

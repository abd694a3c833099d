use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sign::SignLogic;
use crate::errors::AppResult;
use crate::signature::script::{PadCommand, parse_script, parse_stroke};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Sign {
        strokes,
        script,
        clear,
    } = &cli.command
    {
        //
        // 1. Translate the input into pad commands
        //
        let mut commands: Vec<PadCommand> = Vec::new();

        if *clear {
            commands.push(PadCommand::Clear);
        }

        if let Some(file) = script {
            let text = fs::read_to_string(expand_tilde(file))?;
            commands.extend(parse_script(&text)?);
        }

        for stroke in strokes {
            commands.extend(parse_stroke(stroke)?);
        }

        if commands.is_empty() {
            warning("No strokes given. Use --stroke, --script or --clear.");
            return Ok(());
        }

        //
        // 2. Replay them on the pad and store the image
        //
        let mut session = open_session(cli, cfg)?;
        SignLogic::apply(&mut session, cfg, &commands)?;
    }
    Ok(())
}

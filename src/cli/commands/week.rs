use crate::cli::commands::effective_today;
use crate::cli::parser::{Cli, Commands};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_short, iso_week, parse_date, week_bounds};

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Week { date } = &cli.command {
        let d = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => effective_today(cli)?,
        };

        let (monday, saturday) = week_bounds(d);
        println!(
            "KW {} ({} - {})",
            iso_week(d),
            format_short(monday),
            format_short(saturday)
        );
    }
    Ok(())
}

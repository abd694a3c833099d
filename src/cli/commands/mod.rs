pub mod config;
pub mod day;
pub mod export;
pub mod header;
pub mod init;
pub mod log;
pub mod reset;
pub mod set;
pub mod show;
pub mod sign;
pub mod summary;
pub mod week;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::form::FormSession;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Today, or the hidden `--today` override.
pub(crate) fn effective_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(date::today()),
    }
}

/// Open the database and load the current week's report.
pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<FormSession<DbPool>> {
    let today = effective_today(cli)?;
    let pool = DbPool::new(&cfg.database)?;
    Core::open(pool, today)
}

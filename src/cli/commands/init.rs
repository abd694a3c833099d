use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config file (unless --test) and database.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = cfg.init_all(cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let pool = DbPool::new(&cfg.database)?;
    audit(&pool, "init", "database", "database initialized");

    success(format!("Database:    {}", db_path.display()));
    Ok(())
}

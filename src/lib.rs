//! wochenbericht library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: time math, weekly totals, persistence, signature and export.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod signature;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => commands::show::handle(cli, cfg),
        Commands::Set { .. } => commands::set::handle(cli, cfg),
        Commands::Day { .. } => commands::day::handle(cli, cfg),
        Commands::Header { .. } => commands::header::handle(cli, cfg),
        Commands::Reset => commands::reset::handle(cli, cfg),
        Commands::Sign { .. } => commands::sign::handle(cli, cfg),
        Commands::Export { .. } => commands::export::handle(cli, cfg),
        Commands::Summary { .. } => commands::summary::handle(cli, cfg),
        Commands::Week { .. } => commands::week::handle(cli),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ apply database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

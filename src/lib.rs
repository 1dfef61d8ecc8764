//! hrdash library root.
//! Exposes the CLI parser, the high-level run() function, and the core
//! directory / bookmark / filter / analytics modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg),
        Commands::Bookmark { .. } | Commands::Unbookmark { .. } | Commands::Toggle { .. } => {
            commands::bookmark::handle(&cli.command, cfg)
        }
        Commands::Bookmarks { .. } => commands::bookmarks::handle(&cli.command, cfg),
        Commands::Promote { .. } => commands::promote::handle(&cli.command, cfg),
        Commands::Analytics { .. } => commands::analytics::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Shell => commands::shell::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(source) = &cli.source {
        cfg.api_url = source.clone();
    }
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;
    logging::init_tracing(&cfg.log_level);

    // 3️⃣ command line wins over the config file
    apply_overrides(&cli, &mut cfg);
    tracing::debug!(database = %cfg.database, source = %cfg.api_url, "configuration resolved");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

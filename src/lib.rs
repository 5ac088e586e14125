//! phototime library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (calculator, cache, extractors) for reuse and tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod extract;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Scan { .. } => {
            let folder = cli::commands::resolve_folder(cli)?;
            cli::commands::scan::handle(&cli.command, cfg, &folder)
        }
        Commands::Time { .. } => {
            let folder = cli::commands::resolve_folder(cli)?;
            cli::commands::time::handle(&cli.command, cfg, &folder)
        }
        Commands::Cache { .. } => {
            let folder = cli::commands::resolve_folder(cli)?;
            cli::commands::cache::handle(&cli.command, cfg, &folder)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the per-user file
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = Config::load(&config_path)?;

    dispatch(&cli, &cfg, &config_path)
}

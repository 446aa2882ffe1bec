//! gymbook library root.
//! Exposes the CLI parser, the high-level run() function and the core modules
//! (table store, category and color rules, calendar projection, balances,
//! backup archive).

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::gate::AccessGate;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let gate = AccessGate::new(&cfg.passphrase);
    if cli.command.requires_coach() {
        gate.check(cli.passphrase.as_deref())?;
    }

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg, config_path),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => cli::commands::config::handle(
            cfg,
            config_path,
            *print_config,
            *edit_config,
            editor,
            gate.check(cli.passphrase.as_deref()).is_ok(),
        ),
        Commands::Day { date } => cli::commands::day::handle(date.as_deref(), cfg),
        Commands::Balance { name } => cli::commands::student::handle_balance(name, cfg),
        Commands::Lesson { action } => cli::commands::lesson::handle(action, cfg),
        Commands::Student { action } => cli::commands::student::handle(action, cfg),
        Commands::Category { action } => cli::commands::category::handle(action, cfg),
        Commands::Request { action } => cli::commands::request::handle(action, cfg),
        Commands::Event { action } => cli::commands::event::handle(action, cfg),
        Commands::Calendar { period, json, file } => {
            cli::commands::calendar::handle(period.as_deref(), *json, file.as_deref(), cfg)
        }
        Commands::Report => cli::commands::report::handle(cfg),
        Commands::Backup { action } => cli::commands::backup::handle(action, cfg),
        Commands::Reset { yes } => cli::commands::reset::handle(*yes, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;

    // 3️⃣ command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    tracing::debug!(config = %config_path.display(), data_dir = %cfg.data_dir, "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}

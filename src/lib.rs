//! shiftledger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In { .. } => cli::commands::clock_in::handle(&cli.command, cfg),
        Commands::Out { .. } => cli::commands::clock_out::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Ranking { .. } => cli::commands::ranking::handle(&cli.command, cfg),
        Commands::ForceOut { .. } => cli::commands::force_out::handle(&cli.command, cfg),
        Commands::ForceOutAll => cli::commands::force_out_all::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply ledger override from the command line; the audit log
    // follows the ledger so tests stay out of the real config dir
    if let Some(custom_ledger) = &cli.ledger {
        cfg.ledger = custom_ledger.clone();
        cfg.audit_log = format!("{custom_ledger}.log");
    }

    dispatch(&cli, &cfg)
}

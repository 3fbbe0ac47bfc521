//! watercooler library root.
//! Exposes the CLI parser, the high-level run() function, and the ledger and
//! inventory modules so they can be driven without the binary.

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
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter.
pub const LOG_ENV: &str = "WATERCOOLER_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Ledger { .. } => cli::commands::ledger::handle(&cli.command, cfg),
        Commands::Charge { .. } => cli::commands::charge::handle(&cli.command, cfg),
        Commands::Pay { .. } => cli::commands::pay::handle(&cli.command, cfg),
        Commands::Drink { .. } => cli::commands::drink::handle(&cli.command, cfg),
        Commands::ResetDay => cli::commands::reset::handle(cfg),
        Commands::Rank => cli::commands::rank::handle(cfg),
        Commands::Stock { .. } => cli::commands::stock::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr so table output on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing();

    let mut cfg = Config::load()?;

    // command-line table paths win over the config file
    if let Some(ledger) = &cli.ledger {
        cfg.ledger_file = ledger.clone();
    }
    if let Some(inventory) = &cli.inventory {
        cfg.inventory_file = inventory.clone();
    }

    tracing::debug!(ledger = %cfg.ledger_file, inventory = %cfg.inventory_file, "configuration resolved");

    dispatch(&cli, &cfg)
}

use crate::cli::commands::{open_inventory, open_ledger};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty ledger table, unless one already exists
///  - the default inventory row, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.ledger.clone(), cli.inventory.clone(), cli.test)?;

    info("Initializing watercooler…");

    let mut ledger = open_ledger(&cfg);
    if ledger.ensure_exists()? {
        success(format!("Ledger created:    {}", ledger.location()));
    } else {
        info(format!("Ledger kept:       {}", ledger.location()));
    }

    let mut inventory = open_inventory(&cfg);
    inventory.load()?;
    success(format!("Inventory ready:   {}", inventory.location()));

    Ok(())
}

use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DrinkLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drink { name, ml } = cmd {
        let mut store = open_ledger(cfg);
        DrinkLogic::apply(&mut store, name.trim(), *ml)?;
    }
    Ok(())
}

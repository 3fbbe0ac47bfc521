use crate::cli::commands::{open_ledger, selection};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ChargeLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Charge { amount, names } = cmd {
        let amount = amount.unwrap_or(cfg.default_charge);
        let mut store = open_ledger(cfg);
        ChargeLogic::apply(&mut store, &selection(names), amount)?;
    }
    Ok(())
}

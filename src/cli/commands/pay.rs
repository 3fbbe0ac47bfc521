use crate::cli::commands::{open_ledger, selection};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PayLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pay { names, undo } = cmd {
        let mut store = open_ledger(cfg);
        PayLogic::apply(&mut store, &selection(names), !*undo)?;
    }
    Ok(())
}

use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::core::ResetLogic;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_ledger(cfg);
    ResetLogic::apply(&mut store)?;
    Ok(())
}

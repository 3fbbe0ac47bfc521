use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_ledger(cfg);
        let rows = ExportLogic::export(&store, *format, file, *force)?;
        tracing::debug!(format = format.as_str(), rows, file = %file, "export finished");
    }
    Ok(())
}

// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ledger_rows;
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the current ledger to `file` as CSV or JSON.
    /// The path must be absolute; an existing file needs `force` or a yes.
    pub fn export<S: Storage>(
        store: &LedgerStore<S>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let ledger = store.load()?;
        if ledger.is_empty() {
            warning("The ledger is empty, nothing to export.");
            return Ok(0);
        }

        let rows = ledger_rows(&ledger);
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

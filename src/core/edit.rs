//! Direct edits of ledger rows and cells, including the bulk edit path where a
//! whole edited table replaces the stored one.

use crate::errors::{AppError, AppResult};
use crate::models::ledger::Ledger;
use crate::models::person::Person;
use crate::store::ledger::{reconcile_edit, render_ledger};
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::{info, success, warning};
use crate::utils::editor::edit_file;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub struct EditLogic;

impl EditLogic {
    /// Append one fresh row per name. Empty names are refused before anything
    /// is written.
    pub fn add<S: Storage>(store: &mut LedgerStore<S>, names: &[String]) -> AppResult<usize> {
        let mut cleaned = Vec::with_capacity(names.len());
        for (i, raw) in names.iter().enumerate() {
            let name = raw.trim();
            if name.is_empty() {
                return Err(AppError::EmptyName(i + 1));
            }
            cleaned.push(name.to_string());
        }

        let mut ledger = store.load()?;
        for name in cleaned.iter() {
            if ledger.find(name).is_some() {
                warning(format!("'{}' is already in the ledger, adding another row.", name));
            }
            ledger.push(Person::new(name.clone()));
        }
        store.save(&ledger)?;

        success(format!("Added {} row(s).", cleaned.len()));
        Ok(cleaned.len())
    }

    /// Overwrite the given cells of every row named `name`.
    pub fn set<S: Storage>(
        store: &mut LedgerStore<S>,
        name: &str,
        debt: Option<f64>,
        paid: Option<bool>,
        ml: Option<u32>,
    ) -> AppResult<usize> {
        if debt.is_none() && paid.is_none() && ml.is_none() {
            warning("Nothing to change: pass --debt, --paid or --ml.");
            return Ok(0);
        }

        let mut ledger = store.load()?;
        let touched = ledger.edit(name, debt, paid, ml)?;
        store.save(&ledger)?;

        success(format!("Updated {touched} row(s) for '{name}'."));
        Ok(touched)
    }

    pub fn remove<S: Storage>(
        store: &mut LedgerStore<S>,
        names: &BTreeSet<String>,
    ) -> AppResult<usize> {
        let mut ledger = store.load()?;
        let removed = ledger.remove(names);

        if removed == 0 {
            warning("No matching rows, ledger unchanged.");
            return Ok(0);
        }

        store.save(&ledger)?;
        success(format!("Removed {removed} row(s)."));
        Ok(removed)
    }

    /// Replace the whole ledger with an edited table. Every row needs a name;
    /// empty cells get the load defaults.
    pub fn replace<S: Storage>(store: &mut LedgerStore<S>, edited: &[u8]) -> AppResult<Ledger> {
        let ledger = reconcile_edit(edited)?;
        store.save(&ledger)?;
        success(format!("Ledger saved ({} rows).", ledger.len()));
        Ok(ledger)
    }

    pub fn import<S: Storage>(store: &mut LedgerStore<S>, file: &Path) -> AppResult<Ledger> {
        let bytes = fs::read(file)?;
        info(format!("Importing ledger from {}", file.display()));
        Self::replace(store, &bytes)
    }

    /// Open the current ledger in an editor and save the result back.
    pub fn edit_in_editor<S: Storage>(
        store: &mut LedgerStore<S>,
        editor: Option<&str>,
    ) -> AppResult<Option<Ledger>> {
        let current = store.load()?;
        let original = render_ledger(&current)?;

        let tmp = std::env::temp_dir().join(format!("watercooler-ledger-{}.csv", std::process::id()));
        fs::write(&tmp, &original)?;

        let result = edit_file(&tmp, editor).and_then(|_| fs::read(&tmp).map_err(AppError::from));
        if let Err(e) = fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), error = %e, "could not remove temp file");
        }
        let edited = result?;

        if edited == original {
            info("No changes.");
            return Ok(None);
        }

        Self::replace(store, &edited).map(Some)
    }
}

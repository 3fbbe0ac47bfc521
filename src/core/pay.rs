use crate::errors::AppResult;
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::{success, warning};
use std::collections::BTreeSet;

/// Toggle the paid flag. Debt amounts are never touched here.
pub struct PayLogic;

impl PayLogic {
    pub fn apply<S: Storage>(
        store: &mut LedgerStore<S>,
        names: &BTreeSet<String>,
        paid: bool,
    ) -> AppResult<usize> {
        if names.is_empty() {
            warning("Select at least one person.");
            return Ok(0);
        }

        let mut ledger = store.load()?;
        let touched = ledger.set_paid(names, paid);

        if touched == 0 {
            warning("Nobody in the selection is in the ledger.");
            return Ok(0);
        }

        store.save(&ledger)?;
        let state = if paid { "paid" } else { "not paid" };
        success(format!("Marked {touched} row(s) as {state}."));
        Ok(touched)
    }
}

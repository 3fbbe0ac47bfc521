use crate::errors::AppResult;
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::success;

/// Start a new hydration day: everyone back to 0 ml.
pub struct ResetLogic;

impl ResetLogic {
    pub fn apply<S: Storage>(store: &mut LedgerStore<S>) -> AppResult<usize> {
        let mut ledger = store.load()?;
        ledger.reset_daily();
        store.save(&ledger)?;

        success(format!("Daily counters reset for {} people.", ledger.len()));
        Ok(ledger.len())
    }
}

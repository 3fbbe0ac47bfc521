use crate::errors::AppResult;
use crate::models::drink::DrinkSize;
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::success;
use crate::utils::volume;

pub struct DrinkLogic;

impl DrinkLogic {
    /// Add a cup for `name` and persist right away. Unknown names change
    /// nothing and are not reported as errors.
    pub fn apply<S: Storage>(
        store: &mut LedgerStore<S>,
        name: &str,
        size: DrinkSize,
    ) -> AppResult<bool> {
        let mut ledger = store.load()?;

        if !ledger.record_drink(name, size) {
            tracing::debug!(name, ml = size.ml(), "drink for unknown name ignored");
            return Ok(false);
        }

        store.save(&ledger)?;

        if let Some(p) = ledger.find(name) {
            success(format!(
                "{} +{} (today: {})",
                p.name,
                volume(size.ml()),
                volume(p.drunk_today_ml)
            ));
        }
        Ok(true)
    }
}

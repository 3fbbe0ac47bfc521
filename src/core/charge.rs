use crate::errors::AppResult;
use crate::models::ledger::ChargeOutcome;
use crate::store::{LedgerStore, Storage};
use crate::ui::messages::{success, warning};
use std::collections::BTreeSet;

/// High-level business logic for the `charge` command.
pub struct ChargeLogic;

impl ChargeLogic {
    /// Add `amount` to everyone in `names` and persist. An empty selection
    /// only warns; nothing is written.
    pub fn apply<S: Storage>(
        store: &mut LedgerStore<S>,
        names: &BTreeSet<String>,
        amount: f64,
    ) -> AppResult<ChargeOutcome> {
        let mut ledger = store.load()?;
        let outcome = ledger.add_debt(names, amount)?;

        match outcome {
            ChargeOutcome::NoSelection => {
                warning("Select at least one person to charge.");
            }
            ChargeOutcome::Charged(n) => {
                store.save(&ledger)?;
                let missing: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .filter(|name| ledger.find(name).is_none())
                    .collect();
                if !missing.is_empty() {
                    warning(format!("Not in the ledger: {}", missing.join(", ")));
                }
                success(format!("Charged {amount:.2} to {n} row(s)."));
            }
        }

        Ok(outcome)
    }
}

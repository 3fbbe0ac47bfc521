pub mod charge;
pub mod config;
pub mod drink;
pub mod export;
pub mod init;
pub mod ledger;
pub mod pay;
pub mod rank;
pub mod reset;
pub mod stock;

use crate::config::Config;
use crate::store::{FileStorage, InventoryStore, LedgerStore};
use std::collections::BTreeSet;

/// Ledger table at the configured path.
pub(crate) fn open_ledger(cfg: &Config) -> LedgerStore<FileStorage> {
    LedgerStore::new(FileStorage::new(cfg.ledger_path()))
}

/// Inventory table at the configured path.
pub(crate) fn open_inventory(cfg: &Config) -> InventoryStore<FileStorage> {
    InventoryStore::new(FileStorage::new(cfg.inventory_path()))
        .with_timestamp_format(cfg.timestamp_format.clone())
}

/// Command-line names as a selection set, blanks dropped.
pub(crate) fn selection(names: &[String]) -> BTreeSet<String> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

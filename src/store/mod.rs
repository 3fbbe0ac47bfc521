//! Persistence of the two tables. Each store loads and saves its whole table
//! through a `Storage` medium; there is no locking and the last save wins.

pub mod codec;
pub mod inventory;
pub mod ledger;
pub mod storage;

pub use inventory::InventoryStore;
pub use ledger::LedgerStore;
pub use storage::{FileStorage, MemoryStorage, Storage};

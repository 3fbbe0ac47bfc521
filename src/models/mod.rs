pub mod drink;
pub mod inventory;
pub mod ledger;
pub mod person;
pub mod ranking;

pub use drink::DrinkSize;
pub use inventory::{Inventory, InventoryUpdate};
pub use ledger::{ChargeOutcome, Ledger};
pub use person::Person;
pub use ranking::Ranking;

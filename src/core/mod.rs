//! Commands as load → change → save cycles over one store.

pub mod charge;
pub mod drink;
pub mod edit;
pub mod pay;
pub mod reset;
pub mod stock;

pub use charge::ChargeLogic;
pub use drink::DrinkLogic;
pub use edit::EditLogic;
pub use pay::PayLogic;
pub use reset::ResetLogic;
pub use stock::{StockChanges, StockLogic};

use crate::errors::AppResult;
use crate::models::inventory::{Inventory, InventoryUpdate};
use crate::store::{InventoryStore, Storage};
use crate::ui::messages::success;
use crate::utils::clock::Clock;

/// Fields given on the command line; the rest keep their stored values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockChanges {
    pub jug_price: Option<f64>,
    pub full_jugs: Option<u32>,
    pub empty_jugs: Option<u32>,
    pub reorder_placed: Option<bool>,
}

impl StockChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Complete update built on top of the current inventory.
    pub fn resolve(&self, current: &Inventory) -> InventoryUpdate {
        let base = current.as_update();
        InventoryUpdate {
            jug_price: self.jug_price.unwrap_or(base.jug_price),
            full_jugs: self.full_jugs.unwrap_or(base.full_jugs),
            empty_jugs: self.empty_jugs.unwrap_or(base.empty_jugs),
            reorder_placed: self.reorder_placed.unwrap_or(base.reorder_placed),
        }
    }
}

pub struct StockLogic;

impl StockLogic {
    pub fn apply<S: Storage>(
        store: &mut InventoryStore<S>,
        changes: &StockChanges,
        clock: &dyn Clock,
    ) -> AppResult<Inventory> {
        let current = store.load()?;
        let update = changes.resolve(&current);
        let inv = store.update(&update, clock)?;

        success("Stock saved!");
        Ok(inv)
    }
}

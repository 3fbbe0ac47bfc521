//! Single-row inventory table (`estoque.csv`).

use csv::WriterBuilder;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::inventory::{Inventory, InventoryUpdate};
use crate::store::codec::{format_decimal, format_flag, parse_count, parse_decimal, parse_flag, read_rows};
use crate::store::storage::Storage;
use crate::utils::clock::Clock;

pub const INVENTORY_HEADERS: [&str; 5] =
    ["Preco_Galao", "Cheios", "Vazios", "Pedido_Feito", "Data_Pedido"];

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m %H:%M";

#[derive(Debug, Default, Deserialize)]
struct InventoryRow {
    #[serde(rename = "Preco_Galao", default)]
    jug_price: Option<String>,
    #[serde(rename = "Cheios", default)]
    full_jugs: Option<String>,
    #[serde(rename = "Vazios", default)]
    empty_jugs: Option<String>,
    #[serde(rename = "Pedido_Feito", default)]
    reorder_placed: Option<String>,
    #[serde(rename = "Data_Pedido", default)]
    reorder_timestamp: Option<String>,
}

impl InventoryRow {
    fn normalize(self) -> Inventory {
        let fallback = Inventory::default();
        Inventory {
            jug_price: parse_decimal(self.jug_price.as_deref())
                .filter(|p| *p > 0.0)
                .unwrap_or(fallback.jug_price),
            full_jugs: parse_count(self.full_jugs.as_deref()).unwrap_or(fallback.full_jugs),
            empty_jugs: parse_count(self.empty_jugs.as_deref()).unwrap_or(fallback.empty_jugs),
            reorder_placed: parse_flag(self.reorder_placed.as_deref())
                .unwrap_or(fallback.reorder_placed),
            reorder_timestamp: self
                .reorder_timestamp
                .as_deref()
                .and_then(Inventory::parse_reorder_label),
        }
    }
}

/// Parse the inventory table. `None` when the table holds no data row.
pub fn parse_inventory(bytes: &[u8]) -> AppResult<Option<Inventory>> {
    let rows: Vec<InventoryRow> = read_rows(bytes)?;
    if rows.len() > 1 {
        tracing::warn!(rows = rows.len(), "inventory has extra rows, only the first is used");
    }
    Ok(rows.into_iter().next().map(InventoryRow::normalize))
}

pub fn render_inventory(inv: &Inventory) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(INVENTORY_HEADERS)?;
    wtr.write_record([
        format_decimal(inv.jug_price),
        inv.full_jugs.to_string(),
        inv.empty_jugs.to_string(),
        format_flag(inv.reorder_placed).to_string(),
        inv.reorder_label().to_string(),
    ])?;

    wtr.into_inner()
        .map_err(|e| AppError::Other(format!("CSV buffer error: {e}")))
}

/// Handle on the persisted inventory row.
pub struct InventoryStore<S: Storage> {
    storage: S,
    timestamp_format: String,
}

impl<S: Storage> InventoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Current inventory. When nothing usable is stored, the default row is
    /// persisted first and returned.
    pub fn load(&mut self) -> AppResult<Inventory> {
        let stored = match self.storage.read()? {
            Some(bytes) => parse_inventory(&bytes)?,
            None => None,
        };

        match stored {
            Some(inv) => Ok(inv),
            None => {
                let inv = Inventory::default();
                self.save(&inv)?;
                tracing::info!(location = %self.storage.location(), "created default inventory");
                Ok(inv)
            }
        }
    }

    pub fn save(&mut self, inv: &Inventory) -> AppResult<()> {
        let bytes = render_inventory(inv)?;
        self.storage.write(&bytes)
    }

    /// Set all four editable fields, apply the reorder timestamp rule and persist.
    pub fn update(&mut self, update: &InventoryUpdate, clock: &dyn Clock) -> AppResult<Inventory> {
        let mut inv = self.load()?;
        inv.apply(update, clock, &self.timestamp_format)?;
        self.save(&inv)?;
        tracing::info!(
            price = inv.jug_price,
            full = inv.full_jugs,
            empty = inv.empty_jugs,
            reorder = inv.reorder_placed,
            "inventory updated"
        );
        Ok(inv)
    }
}

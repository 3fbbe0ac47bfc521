use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use serde::Serialize;
use std::fmt::Write;

/// Text stored in `Data_Pedido` while no reorder is pending.
pub const NO_REORDER: &str = "-";

/// Placeholders written by older copies of the sheet.
const LEGACY_PLACEHOLDERS: [&str; 3] = ["-", "N/A", ""];

/// The single inventory row: jug price, stock and reorder status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    pub jug_price: f64,
    pub full_jugs: u32,
    pub empty_jugs: u32,
    pub reorder_placed: bool,
    /// Formatted local time of the last false→true reorder transition.
    pub reorder_timestamp: Option<String>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            jug_price: 15.0,
            full_jugs: 2,
            empty_jugs: 1,
            reorder_placed: false,
            reorder_timestamp: None,
        }
    }
}

/// The four editable inventory fields, always supplied together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryUpdate {
    pub jug_price: f64,
    pub full_jugs: u32,
    pub empty_jugs: u32,
    pub reorder_placed: bool,
}

impl Inventory {
    /// Timestamp column text as persisted.
    pub fn reorder_label(&self) -> &str {
        self.reorder_timestamp.as_deref().unwrap_or(NO_REORDER)
    }

    /// Parse a persisted timestamp cell, mapping every known placeholder to `None`.
    pub fn parse_reorder_label(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if LEGACY_PLACEHOLDERS.contains(&trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Current values as an update, used to fill fields the caller left out.
    pub fn as_update(&self) -> InventoryUpdate {
        InventoryUpdate {
            jug_price: self.jug_price,
            full_jugs: self.full_jugs,
            empty_jugs: self.empty_jugs,
            reorder_placed: self.reorder_placed,
        }
    }

    /// Apply an update. The reorder timestamp is stamped only on the
    /// false→true transition and cleared whenever no reorder is placed.
    pub fn apply(
        &mut self,
        update: &InventoryUpdate,
        clock: &dyn Clock,
        timestamp_format: &str,
    ) -> AppResult<()> {
        if !update.jug_price.is_finite() || update.jug_price <= 0.0 {
            return Err(AppError::InvalidAmount(format!(
                "jug price must be greater than zero, got {}",
                update.jug_price
            )));
        }

        if update.reorder_placed && !self.reorder_placed {
            let mut stamp = String::new();
            write!(stamp, "{}", clock.now().format(timestamp_format)).map_err(|_| {
                AppError::Config(format!("invalid timestamp_format '{timestamp_format}'"))
            })?;
            self.reorder_timestamp = Some(stamp);
        } else if !update.reorder_placed {
            self.reorder_timestamp = None;
        }

        self.jug_price = update.jug_price;
        self.full_jugs = update.full_jugs;
        self.empty_jugs = update.empty_jugs;
        self.reorder_placed = update.reorder_placed;

        Ok(())
    }
}

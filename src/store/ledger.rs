//! Person ledger table (`usuarios.csv`).

use csv::WriterBuilder;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::ledger::Ledger;
use crate::models::person::Person;
use crate::store::codec::{
    format_decimal, format_flag, parse_count, parse_decimal, parse_flag, parse_name, read_rows,
};
use crate::store::storage::Storage;

pub const LEDGER_HEADERS: [&str; 4] = ["Nome", "Divida", "Pago", "Copo_ML_Hoje"];

/// A ledger row exactly as found in the file, before defaulting.
#[derive(Debug, Default, Deserialize)]
pub struct PersonRow {
    #[serde(rename = "Nome", default)]
    pub name: Option<String>,
    #[serde(rename = "Divida", default)]
    pub debt: Option<String>,
    #[serde(rename = "Pago", default)]
    pub paid: Option<String>,
    #[serde(rename = "Copo_ML_Hoje", default)]
    pub drunk_today_ml: Option<String>,
}

impl PersonRow {
    /// Fill missing cells with their defaults: 0.0 debt, not paid, 0 ml.
    fn with_defaults(self, name: String) -> Person {
        Person {
            name,
            debt: parse_decimal(self.debt.as_deref()).unwrap_or(0.0),
            paid: parse_flag(self.paid.as_deref()).unwrap_or(false),
            drunk_today_ml: parse_count(self.drunk_today_ml.as_deref()).unwrap_or(0),
        }
    }

    /// Load rule: rows without a usable name are dropped.
    pub fn normalize(mut self) -> Option<Person> {
        let name = parse_name(self.name.take())?;
        Some(self.with_defaults(name))
    }

    /// Bulk-edit rule: a row without a name is an input error.
    pub fn reconcile(mut self, row_number: usize) -> AppResult<Person> {
        let name = parse_name(self.name.take()).ok_or(AppError::EmptyName(row_number))?;
        Ok(self.with_defaults(name))
    }
}

/// Parse a persisted ledger, defaulting cells and dropping nameless rows.
pub fn parse_ledger(bytes: &[u8]) -> AppResult<Ledger> {
    let rows: Vec<PersonRow> = read_rows(bytes)?;
    let total = rows.len();
    let people: Vec<Person> = rows.into_iter().filter_map(PersonRow::normalize).collect();

    if people.len() < total {
        tracing::debug!(dropped = total - people.len(), "discarded ledger rows without a name");
    }
    Ok(Ledger::new(people))
}

/// Parse a bulk-edited ledger. Every row must carry a name; other cells are
/// defaulted the same way a load does.
pub fn reconcile_edit(bytes: &[u8]) -> AppResult<Ledger> {
    let rows: Vec<PersonRow> = read_rows(bytes)?;
    let people = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.reconcile(i + 1))
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Ledger::new(people))
}

/// Serialize the whole ledger, header included even when there are no rows.
pub fn render_ledger(ledger: &Ledger) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(LEDGER_HEADERS)?;

    for p in ledger.people() {
        wtr.write_record([
            p.name.clone(),
            format_decimal(p.debt),
            format_flag(p.paid).to_string(),
            p.drunk_today_ml.to_string(),
        ])?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Other(format!("CSV buffer error: {e}")))
}

/// Handle on the persisted person ledger.
pub struct LedgerStore<S: Storage> {
    storage: S,
}

impl<S: Storage> LedgerStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Current ledger; an empty one when nothing has been persisted yet.
    pub fn load(&self) -> AppResult<Ledger> {
        match self.storage.read()? {
            Some(bytes) => parse_ledger(&bytes),
            None => Ok(Ledger::default()),
        }
    }

    /// Overwrite the persisted ledger with `ledger`.
    pub fn save(&mut self, ledger: &Ledger) -> AppResult<()> {
        let bytes = render_ledger(ledger)?;
        self.storage.write(&bytes)?;
        tracing::info!(rows = ledger.len(), location = %self.storage.location(), "ledger saved");
        Ok(())
    }

    /// Write an empty table if nothing is stored yet. Returns true if it did.
    pub fn ensure_exists(&mut self) -> AppResult<bool> {
        if self.storage.read()?.is_some() {
            return Ok(false);
        }
        self.save(&Ledger::default())?;
        Ok(true)
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }
}

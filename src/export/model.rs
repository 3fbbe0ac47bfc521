// src/export/model.rs

use crate::models::ledger::Ledger;
use serde::Serialize;

/// Flat ledger row for export, with today's ranking position.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PersonExport {
    pub name: String,
    pub debt: f64,
    pub paid: bool,
    pub drunk_today_ml: u32,
    pub rank: usize,
}

/// Rows in ledger order; `rank` is 1-based.
pub(crate) fn ledger_rows(ledger: &Ledger) -> Vec<PersonExport> {
    let ranking = ledger.rank();

    ledger
        .people()
        .iter()
        .map(|p| PersonExport {
            name: p.name.clone(),
            debt: p.debt,
            paid: p.paid,
            drunk_today_ml: p.drunk_today_ml,
            rank: ranking
                .iter()
                .position(|r| std::ptr::eq(r, p))
                .map_or(0, |i| i + 1),
        })
        .collect()
}

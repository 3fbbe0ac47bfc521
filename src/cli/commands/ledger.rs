use crate::cli::commands::{open_ledger, selection};
use crate::cli::parser::{Commands, LedgerAction};
use crate::config::Config;
use crate::core::EditLogic;
use crate::errors::AppResult;
use crate::models::ledger::Ledger;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_debt;
use crate::utils::formatting::yes_no;
use crate::utils::table::{Column, Table};
use crate::utils::{money, volume};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ledger { action } = cmd {
        let mut store = open_ledger(cfg);

        match action {
            LedgerAction::List => {
                let ledger = store.load()?;
                print_ledger(&ledger, &cfg.currency);
            }
            LedgerAction::Add { names } => {
                EditLogic::add(&mut store, names)?;
            }
            LedgerAction::Set {
                name,
                debt,
                paid,
                ml,
            } => {
                EditLogic::set(&mut store, name.trim(), *debt, *paid, *ml)?;
            }
            LedgerAction::Remove { names } => {
                EditLogic::remove(&mut store, &selection(names))?;
            }
            LedgerAction::Edit { editor } => {
                EditLogic::edit_in_editor(&mut store, editor.as_deref())?;
            }
            LedgerAction::Import { file } => {
                EditLogic::import(&mut store, Path::new(file))?;
            }
        }
    }
    Ok(())
}

fn print_ledger(ledger: &Ledger, currency: &str) {
    if ledger.is_empty() {
        info("The ledger is empty. Add people with `watercooler ledger add NAME`.");
        return;
    }

    header("Ledger");

    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Debt"),
        Column::left("Paid"),
        Column::right("Today"),
    ]);

    for p in ledger.people() {
        table.add_colored_row(
            vec![
                p.name.clone(),
                money(currency, p.debt),
                yes_no(p.paid).to_string(),
                volume(p.drunk_today_ml),
            ],
            color_for_debt(p.debt, p.paid),
        );
    }

    print!("{}", table.render());
    println!();
    println!(
        "Outstanding: {}  ({} people)",
        money(currency, ledger.outstanding_total()),
        ledger.len()
    );
}

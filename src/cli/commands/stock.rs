use crate::cli::commands::open_inventory;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{StockChanges, StockLogic};
use crate::errors::AppResult;
use crate::models::inventory::Inventory;
use crate::ui::messages::{header, info};
use crate::utils::clock::SystemClock;
use crate::utils::formatting::yes_no;
use crate::utils::money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stock {
        price,
        full,
        empty,
        ordered,
        not_ordered,
    } = cmd
    {
        let mut store = open_inventory(cfg);

        let reorder_placed = match (*ordered, *not_ordered) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let changes = StockChanges {
            jug_price: *price,
            full_jugs: *full,
            empty_jugs: *empty,
            reorder_placed,
        };

        let inv = if changes.is_empty() {
            store.load()?
        } else {
            StockLogic::apply(&mut store, &changes, &SystemClock)?
        };

        print_inventory(&inv, &cfg.currency);
    }
    Ok(())
}

fn print_inventory(inv: &Inventory, currency: &str) {
    header("Stock");

    let mut table = Table::new(vec![Column::left("Item"), Column::right("Value")]);
    table.add_row(vec!["Jug price".into(), money(currency, inv.jug_price)]);
    table.add_row(vec!["Full jugs".into(), inv.full_jugs.to_string()]);
    table.add_row(vec!["Empty jugs".into(), inv.empty_jugs.to_string()]);
    table.add_row(vec![
        "Order placed".into(),
        yes_no(inv.reorder_placed).to_string(),
    ]);

    print!("{}", table.render());
    println!();
    info(format!("Last order: {}", inv.reorder_label()));
}

use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{banner, header, info};
use crate::utils::formatting::{bold, podium};
use crate::utils::table::{Column, Table};
use crate::utils::volume;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_ledger(cfg);
    let ledger = store.load()?;
    let ranking = ledger.rank();

    if ranking.is_empty() {
        info("Nobody in the ledger yet.");
        return Ok(());
    }

    match ranking.leader() {
        Some(leader) if ranking.has_activity() => banner(format!(
            "Hydration leader: {} with {}",
            bold(&leader.name),
            volume(leader.drunk_today_ml)
        )),
        _ => info("Nobody has had water today yet."),
    }
    println!();

    header("Today's ranking");

    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left(""),
        Column::left("Name"),
        Column::right("Today"),
    ]);

    for (i, p) in ranking.iter().enumerate() {
        let position = i + 1;
        let medal = if p.drunk_today_ml > 0 { podium(position) } else { "" };
        table.add_row(vec![
            position.to_string(),
            medal.to_string(),
            p.name.clone(),
            volume(p.drunk_today_ml),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

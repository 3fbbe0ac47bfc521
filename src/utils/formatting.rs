//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money with two decimals behind the configured currency symbol, e.g. `R$ 15.00`.
pub fn money(currency: &str, amount: f64) -> String {
    format!("{} {:.2}", currency, amount)
}

/// Volume in ml, switching to litres from 1000 ml on.
pub fn volume(ml: u32) -> String {
    if ml >= 1000 {
        format!("{:.1} L", f64::from(ml) / 1000.0)
    } else {
        format!("{} ml", ml)
    }
}

pub fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

/// Medal for the first three places of the ranking.
pub fn podium(position: usize) -> &'static str {
    match position {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Paid rows in green, open debt in red, nothing owed in grey.
pub fn color_for_debt(debt: f64, paid: bool) -> &'static str {
    if paid {
        GREEN
    } else if debt > 0.0 {
        RED
    } else {
        GREY
    }
}

/// Wrap `value` in a color unless `NO_COLOR` is set.
pub fn paint(value: &str, color: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

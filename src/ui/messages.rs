use std::fmt;
use std::sync::OnceLock;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_DROP: &str = "💧";

/// Colors are dropped when `NO_COLOR` is set (https://no-color.org).
fn styled(codes: &'static str) -> &'static str {
    static PLAIN: OnceLock<bool> = OnceLock::new();
    if *PLAIN.get_or_init(|| std::env::var_os("NO_COLOR").is_some()) {
        ""
    } else {
        codes
    }
}

fn line<T: fmt::Display>(color: &'static str, icon: &str, msg: T) -> String {
    format!(
        "{}{}{} {}{}",
        styled(color),
        styled(BOLD),
        icon,
        styled(RESET),
        msg
    )
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section header above tables.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}=== {} ==={}\n",
        styled(FG_CYAN),
        styled(BOLD),
        msg,
        styled(RESET)
    );
}

/// Highlighted one-liner, used for the hydration leader.
pub fn banner<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_CYAN, ICON_DROP, msg));
}

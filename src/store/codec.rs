//! Cell coercion shared by both tables.
//!
//! Cells are read as optional text and coerced leniently: anything that does
//! not parse counts as missing, and the caller picks the default.

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::errors::AppResult;

/// Literal spreadsheet tools write for an empty text cell.
const MISSING_TEXT: &str = "nan";

pub fn parse_decimal(cell: Option<&str>) -> Option<f64> {
    cell?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Non-negative integer; decimals such as `300.0` are truncated.
pub fn parse_count(cell: Option<&str>) -> Option<u32> {
    let raw = cell?.trim();
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.trunc() as u32)
}

pub fn parse_flag(cell: Option<&str>) -> Option<bool> {
    match cell?.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

pub fn format_flag(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

/// Decimals always carry a fractional part so the column reads as a float.
pub fn format_decimal(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// Name cell as text, or `None` when it is empty or the missing-text literal.
pub fn parse_name(cell: Option<String>) -> Option<String> {
    let name = cell?;
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == MISSING_TEXT {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Deserialize every data row of a CSV blob with a header line.
///
/// Rows may be shorter or longer than the header; missing cells read as
/// empty and unknown columns are ignored.
pub fn read_rows<T: DeserializeOwned>(bytes: &[u8]) -> AppResult<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

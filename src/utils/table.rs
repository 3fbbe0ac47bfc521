//! Table rendering utilities for CLI outputs.

use crate::utils::colors::paint;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Row {
    pub cells: Vec<String>,
    pub color: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, color: None });
    }

    /// Row painted as a whole, so padding is computed on the plain text.
    pub fn add_colored_row(&mut self, cells: Vec<String>, color: &'static str) {
        self.rows.push(Row {
            cells,
            color: Some(color),
        });
    }

    /// Display width of each column: the widest of header and cells.
    /// Accented names are measured by terminal width, not bytes.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers, &widths, None);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule_refs: Vec<&str> = rule.iter().map(String::as_str).collect();
        self.push_line(&mut out, &rule_refs, &widths, None);

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.cells.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            self.push_line(&mut out, &cells, &widths, row.color);
        }

        out
    }

    fn push_line(
        &self,
        out: &mut String,
        cells: &[&str],
        widths: &[usize],
        color: Option<&'static str>,
    ) {
        let mut line = String::new();
        for ((cell, col), width) in cells.iter().zip(&self.columns).zip(widths) {
            let pad = " ".repeat(width.saturating_sub(cell.width()));
            match col.align {
                Align::Left => {
                    line.push_str(cell);
                    line.push_str(&pad);
                }
                Align::Right => {
                    line.push_str(&pad);
                    line.push_str(cell);
                }
            }
            line.push_str("  ");
        }
        let line = line.trim_end();
        match color {
            Some(c) => out.push_str(&paint(line, c)),
            None => out.push_str(line),
        }
        out.push('\n');
    }
}

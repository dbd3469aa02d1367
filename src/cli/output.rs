//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use chrono::{Local, TimeZone};
use colored::Colorize;

use crate::openai::FileRecord;

const HEADERS: [&str; 4] = ["ID", "Filename", "Size", "Created"];
const COLUMN_GAP: &str = "  ";

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print failure (red X and "Error:" prefix) to stderr
pub fn failure(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{} Error: {}", "✗".red(), msg);
}

/// Print plain output (no color, for tables)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// File size in kilobytes with two decimals, e.g. `1.50 KB`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Unix seconds as a local date/time. Out-of-range values are shown raw.
pub fn format_created(created_at: i64) -> String {
    Local
        .timestamp_opt(created_at, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| created_at.to_string())
}

/// Render records as a left-aligned table: header, rule, one row per record.
pub fn render_table(records: &[FileRecord]) -> String {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                r.filename.clone(),
                format_size(r.bytes),
                format_created(r.created_at),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    let rule = widths.map(|w| "-".repeat(w));

    std::iter::once(&header)
        .chain(std::iter::once(&rule))
        .chain(rows.iter())
        .map(|cells| render_row(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", cell))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

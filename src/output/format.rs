// src/output/format.rs
// =============================================================================
// Renders a record collection as text.
//
// - JSON mode: an aligned table with a header row and a dashed rule
// - text mode: one URL per line
//
// Both return the literal "No results." for an empty collection.
//
// Widths are counted in characters, not bytes, so URLs with non-ASCII
// characters still line up.
// =============================================================================

use crate::cdx::{CdxRecord, OutputMode, HEADER};

pub const NO_RESULTS: &str = "No results.";

const COLUMN_SEPARATOR: &str = " | ";

/// Picks the formatter that matches the output mode
pub fn render(records: &[CdxRecord], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_table(records),
        OutputMode::Text => format_list(records),
    }
}

// Formats records as an aligned table
//
// Example:
//   original          | timestamp      | statuscode
//   ----------------------------------------------
//   http://a.com/x.js | 20200101000000 | 200
//
// Each column is as wide as its widest cell (header included) and every
// cell is left-justified to that width.
pub fn format_table(records: &[CdxRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.chars().count()).collect();
    for record in records {
        for (width, field) in widths.iter_mut().zip(record.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }

    let header_line = join_row(HEADER.iter().copied(), &widths);
    let rule = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header_line);
    lines.push(rule);
    for record in records {
        lines.push(join_row(record.fields().into_iter(), &widths));
    }

    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Formats records as a newline-separated list of URLs
pub fn format_list(records: &[CdxRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    records
        .iter()
        .map(CdxRecord::url)
        .collect::<Vec<_>>()
        .join("\n")
}

//! Table blocks.
//!
//! A block is a title line, a separator line and the rows below it:
//!
//! ```text
//! | Greetings |
//! | -------- | -------- |
//! | hello | world |
//! ```
//!
//! The title line is optional. Without it the first cell of the row just above the
//! separator names the table, and that row is kept as the header (`rows[0]`).

use super::{split_cells, ParseError};
use crate::model::{Table, DEFAULT_TABLE_TITLE};

const SEPARATOR_FILL: &str = "--------";

/// Parses one table block.
///
/// Blank lines inside the block are ignored. Lines below the separator without
/// a pipe are skipped, as are rows whose cells are all empty.
pub fn parse_table(block: &str) -> Result<Table, ParseError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ParseError::MalformedTable);
    }

    let (mut title, start) = match title_cell(lines[0]) {
        Some(title) => (title, 1),
        None => (String::new(), 0),
    };

    let separator = lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| is_separator(line))
        .map(|(i, _)| i)
        .ok_or(ParseError::MissingSeparator)?;

    let mut rows = Vec::new();

    if separator > start {
        let header = split_cells(lines[separator - 1]);
        if !header.is_empty() {
            if title.is_empty() {
                title = header[0].clone();
            }
            rows.push(header);
        }
    }

    let column_count = lines[separator].split('|').count();

    rows.extend(
        lines[separator + 1..]
            .iter()
            .filter(|line| line.contains('|'))
            .map(|line| split_cells(line))
            .filter(|cells| !cells.is_empty()),
    );

    if title.is_empty() {
        title = DEFAULT_TABLE_TITLE.to_string();
    }

    let mut table = Table::new(title, rows);
    table.column_count = column_count;
    Ok(table)
}

/// Renders a table back into block form. An empty table renders as nothing at all.
///
/// The separator gets `column_count - 2` dash segments (at least one), so it
/// parses back to the same `column_count`.
pub fn table_to_markdown(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    // Inner segments only: the wrapping pipes add the two edge segments back
    let segments = table.column_count.saturating_sub(2).max(1);

    let mut out = format!("| {} |\n", table.title);
    out.push_str(&format!("| {} |\n", vec![SEPARATOR_FILL; segments].join(" | ")));
    for row in &table.rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out
}

/// A line is a title line when it is wrapped in pipes and holds exactly one cell.
fn title_cell(line: &str) -> Option<String> {
    if !(line.starts_with('|') && line.ends_with('|')) {
        return None;
    }
    let mut cells = split_cells(line);
    if cells.len() == 1 {
        cells.pop()
    } else {
        None
    }
}

fn is_separator(line: &str) -> bool {
    line.contains('|') && line.contains('-')
}

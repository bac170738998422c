//! Terminal output for `CmdResult`s.
//!
//! Everything here builds a `String` so output can be tested without a
//! terminal. Color comes from `colored`, which turns itself off when stdout is
//! not a tty or `NO_COLOR` is set.

use chrono::{DateTime, Utc};
use cheatz::api::{CmdMessage, MessageLevel};
use cheatz::index::DisplaySheet;
use cheatz::model::Table;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 11;

pub fn render_sheet_list(sheets: &[DisplaySheet]) -> String {
    if sheets.is_empty() {
        return "No cheatsheets found.\n".to_string();
    }

    let idx_width = sheets
        .iter()
        .map(|ds| format!("{}. ", ds.index).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for ds in sheets {
        let idx = format!("{:<width$}", format!("{}. ", ds.index), width = idx_width);
        let count = format!(
            "{:>width$}",
            plural(ds.sheet.metadata.table_count, "table"),
            width = COUNT_WIDTH
        );
        let time_ago = format_time_ago(ds.sheet.metadata.updated_at);

        let available = LINE_WIDTH.saturating_sub(4 + idx_width + COUNT_WIDTH + TIME_WIDTH + 2);
        let name = truncate_to_width(ds.sheet.name(), available);
        let padding = available.saturating_sub(name.width());

        out.push_str(&format!(
            "    {}{}{} {}  {}\n",
            idx.yellow(),
            name,
            " ".repeat(padding),
            count.dimmed(),
            time_ago.dimmed()
        ));
    }
    out
}

pub fn render_full_sheets(sheets: &[DisplaySheet]) -> String {
    let mut out = String::new();
    for (i, ds) in sheets.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            ds.index.to_string().yellow(),
            ds.sheet.name().bold()
        ));
        if !ds.sheet.document.description.is_empty() {
            out.push_str(&format!("{}\n", ds.sheet.document.description.italic()));
        }
        if ds.sheet.tables().is_empty() {
            out.push_str(&format!("\n{}\n", "(no tables)".dimmed()));
        }
        for (pos, table) in ds.sheet.tables().iter().enumerate() {
            out.push('\n');
            out.push_str(&render_table(pos + 1, table));
        }
    }
    out
}

/// One table with its position, cells aligned per column. `rows[0]` is shown
/// as the header.
pub fn render_table(position: usize, table: &Table) -> String {
    let widths = column_widths(&table.rows);

    let mut out = format!(
        "{} {}\n",
        format!("{}.", position).dimmed(),
        table.title.bold().underline()
    );

    let line = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, width)| pad_to_width(cell, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    if let Some(header) = table.header() {
        out.push_str(&format!("  {}\n", line(header).cyan()));
        let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&format!("  {}\n", "─".repeat(rule).dimmed()));
    }
    for row in table.body() {
        out.push_str(&format!("  {}\n", line(row.as_slice())));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.width();
            match widths.get_mut(i) {
                Some(existing) => *existing = (*existing).max(w),
                None => widths.push(w),
            }
        }
    }
    widths
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

//! # Markdown Codec
//!
//! Cheatsheets travel as plain-text markdown in a small, forgiving dialect:
//!
//! ```text
//! # <name>
//!
//! <description line 1>
//! <description line 2>
//!
//! | <table title> |
//! | -------- | -------- |
//! | <cell> | <cell> |
//!
//! | <next table title> |
//! ...
//! ```
//!
//! [`table`] converts one table block to and from a [`Table`](crate::model::Table).
//! [`document`] splits a whole document into name, description and table blocks,
//! delegating each block to [`table`].
//!
//! Both halves are pure functions over borrowed text. They hold no state and do no
//! I/O, so they can be called from anywhere without coordination.
//!
//! This is not CommonMark. Pipes cannot be escaped and cells are single-line.
//! A table block that cannot be read is skipped during document import; only a
//! document with no readable tables at all fails.

use thiserror::Error;

pub mod document;
pub mod table;

pub use document::{document_to_markdown, parse_document};
pub use table::{parse_table, table_to_markdown};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two non-blank lines in a table block.
    #[error("table needs at least a title line and a separator line")]
    MalformedTable,

    /// No line after the optional title contains both `|` and `-`.
    #[error("table has no separator line")]
    MissingSeparator,

    /// The document held no readable table.
    #[error("no tables found to import")]
    EmptyImport,
}

/// Splits a pipe-delimited line into trimmed cells, dropping every empty cell.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

//! Whole cheatsheet documents.
//!
//! Parsing moves strictly forward through three sections: an optional `# name`
//! line, then description lines up to the first line starting with `|`, then
//! table blocks. Once tables have started, any line not starting with `|` only
//! ends the current block; it never goes back into the description.

use super::table::{parse_table, table_to_markdown};
use super::ParseError;
use crate::model::{Document, Table, IMPORTED_SHEET_NAME};

/// Parses a full document.
///
/// Table blocks that fail to parse are dropped and parsing carries on with the
/// next block. The whole parse fails with [`ParseError::EmptyImport`] only when
/// no table could be read, even if a name or description was found.
pub fn parse_document(markdown: &str) -> Result<Document, ParseError> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut cursor = 0;

    let heading = lines
        .first()
        .and_then(|line| line.strip_prefix("# "))
        .map(str::trim);
    let name = match heading {
        Some(heading) => {
            cursor = 1;
            if heading.is_empty() {
                IMPORTED_SHEET_NAME.to_string()
            } else {
                heading.to_string()
            }
        }
        None => IMPORTED_SHEET_NAME.to_string(),
    };

    let mut description = Vec::new();
    while let Some(line) = lines.get(cursor) {
        if line.starts_with('|') {
            break;
        }
        if !line.trim().is_empty() {
            description.push(line.trim_end());
        }
        cursor += 1;
    }

    let mut tables = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in lines[cursor..].iter().copied() {
        if line.starts_with('|') {
            block.push(line);
        } else {
            flush_block(&mut block, &mut tables);
        }
    }
    flush_block(&mut block, &mut tables);

    if tables.is_empty() {
        return Err(ParseError::EmptyImport);
    }

    Ok(Document {
        name,
        description: description.join("\n"),
        tables,
    })
}

fn flush_block(block: &mut Vec<&str>, tables: &mut Vec<Table>) {
    if block.iter().all(|line| line.trim().is_empty()) {
        block.clear();
        return;
    }
    match parse_table(&block.join("\n")) {
        Ok(table) => tables.push(table),
        Err(err) => log::debug!(
            "skipping table block starting {:?}: {}",
            block.first().copied().unwrap_or_default(),
            err
        ),
    }
    block.clear();
}

/// Renders a full document: heading, description, then every non-empty table,
/// each followed by a blank line. Empty tables are left out entirely.
pub fn document_to_markdown(document: &Document) -> String {
    let mut out = format!("# {}\n\n", document.name);

    if !document.description.is_empty() {
        out.push_str(&document.description);
        out.push_str("\n\n");
    }

    for table in &document.tables {
        let markdown = table_to_markdown(table);
        if markdown.is_empty() {
            continue;
        }
        out.push_str(&markdown);
        out.push('\n');
    }

    out
}

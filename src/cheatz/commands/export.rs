use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplaySheet, SheetSelector};
use crate::markdown::document_to_markdown;
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::helpers::{indexed_sheets, sheets_by_selectors};

/// Renders the selected sheets (all of them when none are selected) as one
/// markdown text, in selection order.
pub fn markdown<S: DataStore>(store: &S, selectors: &[SheetSelector]) -> Result<CmdResult> {
    let sheets = resolve_sheets(store, selectors)?;
    let text: String = sheets
        .iter()
        .map(|ds| document_to_markdown(&ds.sheet.document))
        .collect();

    let mut result = CmdResult::default().with_markdown(text);
    if sheets.is_empty() {
        result.add_message(CmdMessage::info("No cheatsheets to export."));
    }
    Ok(result)
}

/// Writes the selected sheets as `.md` files into a `.tar.gz` in `out_dir`.
pub fn archive<S: DataStore>(
    store: &S,
    selectors: &[SheetSelector],
    out_dir: &Path,
) -> Result<CmdResult> {
    let sheets = resolve_sheets(store, selectors)?;

    if sheets.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No cheatsheets to export."));
        return Ok(res);
    }

    let filename = format!("cheatz-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = out_dir.join(filename);
    let file = File::create(&path)?;
    write_archive(file, &sheets)?;

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} cheatsheets to {}",
        sheets.len(),
        path.display()
    )));
    Ok(result)
}

fn resolve_sheets<S: DataStore>(
    store: &S,
    selectors: &[SheetSelector],
) -> Result<Vec<DisplaySheet>> {
    if selectors.is_empty() {
        indexed_sheets(store)
    } else {
        sheets_by_selectors(store, selectors)
    }
}

fn write_archive<W: Write>(writer: W, sheets: &[DisplaySheet]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for ds in sheets {
        let entry_name = format!(
            "cheatz/{}-{}.md",
            sanitize_filename(ds.sheet.name()),
            &ds.sheet.metadata.id.to_string()[..8]
        );
        let content = document_to_markdown(&ds.sheet.document);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())?;
    }

    tar.into_inner()?.finish()?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

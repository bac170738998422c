//! Markdown import.
//!
//! Every file becomes one new cheatsheet. Import is best-effort at every level:
//! unreadable table blocks are dropped by the codec, and a file with no readable
//! table at all is reported as a warning while the remaining files carry on.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::CheatzConfig;
use crate::edit::EditAction;
use crate::error::Result;
use crate::index::SheetSelector;
use crate::markdown::{parse_document, ParseError};
use crate::model::Cheatsheet;
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::{apply_and_save, single_sheet};

pub fn run<S: DataStore>(
    store: &mut S,
    paths: Vec<PathBuf>,
    config: &CheatzConfig,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        if path.is_dir() {
            let mut files: Vec<PathBuf> = fs::read_dir(&path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && config.matches_import_ext(p))
                .collect();
            files.sort();
            for file in files {
                import_file(store, &file, &mut result)?;
            }
        } else if path.is_file() {
            import_file(store, &path, &mut result)?;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        result.affected_sheets.len()
    )));
    Ok(result)
}

/// Imports markdown text (e.g. piped on stdin) as one new sheet.
pub fn text<S: DataStore>(store: &mut S, markdown: &str) -> Result<CmdResult> {
    let document = parse_document(markdown)?;
    let sheet = Cheatsheet::new(document);
    store.save_sheet(&sheet)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} with {} tables",
        sheet.name(),
        sheet.tables().len()
    )));
    Ok(result.with_affected_sheets(vec![sheet]))
}

/// Replaces the name, description and tables of an existing sheet with the
/// content of `markdown`. The sheet keeps its identity.
pub fn into_sheet<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    markdown: &str,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let document = parse_document(markdown)?;
    let updated = apply_and_save(store, &target.sheet, EditAction::ReplaceDocument(document))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} tables into {} ({})",
        updated.tables().len(),
        updated.name(),
        target.index
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

fn import_file<S: DataStore>(store: &mut S, path: &Path, result: &mut CmdResult) -> Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("cannot read {}: {}", path.display(), e);
            result.add_message(CmdMessage::warning(format!(
                "Failed to read: {}",
                path.display()
            )));
            return Ok(());
        }
    };

    match parse_document(&content) {
        Ok(document) => {
            let sheet = Cheatsheet::new(document);
            store.save_sheet(&sheet)?;
            result.add_message(CmdMessage::info(format!(
                "Imported: {} -> {} ({} tables)",
                path.display(),
                sheet.name(),
                sheet.tables().len()
            )));
            result.affected_sheets.push(sheet);
        }
        Err(ParseError::EmptyImport) => {
            result.add_message(CmdMessage::warning(format!(
                "No tables found in {}",
                path.display()
            )));
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::CheatzError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const SHEET_MD: &str = "# My Sheet\n\nQuick reference\n\n| Greetings |\n| -------- | ------- |\n| hello | world |\n";

    #[test]
    fn imports_directory_filtered_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), SHEET_MD).unwrap();
        fs::write(dir.path().join("b.json"), SHEET_MD).unwrap();
        fs::write(dir.path().join("c.txt"), "# Nothing\n\njust prose\n").unwrap();

        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            vec![dir.path().to_path_buf()],
            &CheatzConfig::default(),
        )
        .unwrap();

        assert_eq!(result.affected_sheets.len(), 1);
        let sheets = store.list_sheets().unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].name(), "My Sheet");
        assert_eq!(sheets[0].document.description, "Quick reference");
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("c.txt")));
        assert_eq!(result.messages.last().unwrap().content, "Total imported: 1");
    }

    #[test]
    fn missing_path_is_a_warning() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            vec![PathBuf::from("/definitely/not/here.md")],
            &CheatzConfig::default(),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn text_import_creates_sheet() {
        let mut store = InMemoryStore::new();
        text(&mut store, SHEET_MD).unwrap();
        let sheets = store.list_sheets().unwrap();
        assert_eq!(sheets[0].tables()[0].rows, vec![vec!["hello", "world"]]);
    }

    #[test]
    fn text_without_tables_fails() {
        let mut store = InMemoryStore::new();
        let err = text(&mut store, "# Empty\n\nnothing here").unwrap_err();
        assert!(matches!(err, CheatzError::Parse(ParseError::EmptyImport)));
        assert!(store.list_sheets().unwrap().is_empty());
    }

    #[test]
    fn into_sheet_replaces_content() {
        let mut fixture = StoreFixture::new().with_sheet("Old", 3);
        let id = fixture.store.list_sheets().unwrap()[0].metadata.id;

        into_sheet(&mut fixture.store, &[SheetSelector::Index(1)], SHEET_MD).unwrap();

        let sheet = fixture.store.get_sheet(&id).unwrap();
        assert_eq!(sheet.name(), "My Sheet");
        assert_eq!(sheet.tables().len(), 1);
        assert_eq!(sheet.metadata.table_count, 1);
    }
}

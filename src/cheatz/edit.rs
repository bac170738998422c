//! # Editing
//!
//! Every change to a cheatsheet goes through [`apply`], which takes the current
//! value and an [`EditAction`] and returns the next value. The input is never
//! touched. The caller decides what to do with the result, which is usually
//! saving it through the store.

use crate::error::{CheatzError, Result};
use crate::model::{Cheatsheet, Document, Table};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum EditAction {
    Rename(String),
    Describe(String),
    AddTable(Table),
    ReplaceTable(Table),
    RemoveTable(Uuid),
    /// Array-move semantics: the table at `from` ends up at `to` (both 0-based).
    MoveTable {
        from: usize,
        to: usize,
    },
    ReplaceDocument(Document),
}

pub fn apply(sheet: &Cheatsheet, action: EditAction) -> Result<Cheatsheet> {
    let mut doc = sheet.document.clone();

    match action {
        EditAction::Rename(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CheatzError::Api("Name cannot be empty".into()));
            }
            doc.name = name.to_string();
        }
        EditAction::Describe(description) => {
            doc.description = description.trim_end().to_string();
        }
        EditAction::AddTable(table) => {
            reject_empty(&table)?;
            doc.tables.push(table);
        }
        EditAction::ReplaceTable(table) => {
            reject_empty(&table)?;
            let slot = doc
                .tables
                .iter_mut()
                .find(|t| t.id == table.id)
                .ok_or_else(|| table_not_found(&table.id))?;
            *slot = table;
        }
        EditAction::RemoveTable(id) => {
            let before = doc.tables.len();
            doc.tables.retain(|t| t.id != id);
            if doc.tables.len() == before {
                return Err(table_not_found(&id));
            }
        }
        EditAction::MoveTable { from, to } => {
            let len = doc.tables.len();
            if from >= len || to >= len {
                return Err(CheatzError::Api(format!(
                    "Cannot move table {} to {}: sheet has {} tables",
                    from + 1,
                    to + 1,
                    len
                )));
            }
            let table = doc.tables.remove(from);
            doc.tables.insert(to, table);
        }
        EditAction::ReplaceDocument(mut replacement) => {
            // Only tables with rows take a position
            replacement.tables.retain(|t| !t.is_empty());
            doc = replacement;
        }
    }

    Ok(sheet.with_document(doc))
}

fn reject_empty(table: &Table) -> Result<()> {
    if table.is_empty() {
        return Err(CheatzError::Api(format!(
            "Table \"{}\" has no rows",
            table.title
        )));
    }
    Ok(())
}

fn table_not_found(id: &Uuid) -> CheatzError {
    CheatzError::Api(format!("Table {} not found", id))
}

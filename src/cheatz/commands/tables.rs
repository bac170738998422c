//! Per-table operations inside one sheet. Tables are addressed by their
//! 1-based position, which is also their display and export order.

use crate::commands::{CmdMessage, CmdResult};
use crate::edit::EditAction;
use crate::error::Result;
use crate::index::SheetSelector;
use crate::markdown::parse_table;
use crate::store::DataStore;

use super::helpers::{apply_and_save, single_sheet, table_at};

/// Parses `markdown` as one table block and appends it to the sheet.
pub fn add<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    markdown: &str,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let table = parse_table(markdown)?;
    let title = table.title.clone();
    let updated = apply_and_save(store, &target.sheet, EditAction::AddTable(table))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Table added to {} as table {}: {}",
        updated.name(),
        updated.tables().len(),
        title
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

/// Replaces the content of the table at `position`, keeping its identity.
pub fn replace<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    position: usize,
    markdown: &str,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let existing = table_at(&target.sheet, position)?;

    let mut table = parse_table(markdown)?;
    table.id = existing.id;
    let title = table.title.clone();
    let updated = apply_and_save(store, &target.sheet, EditAction::ReplaceTable(table))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Table {} updated in {}: {}",
        position,
        updated.name(),
        title
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

pub fn remove<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    position: usize,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let table = table_at(&target.sheet, position)?;
    let title = table.title.clone();
    let updated = apply_and_save(store, &target.sheet, EditAction::RemoveTable(table.id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Table removed from {}: {}",
        updated.name(),
        title
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

/// Moves the table at `from` so it ends up at `to` (both 1-based).
pub fn move_table<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    from: usize,
    to: usize,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let title = table_at(&target.sheet, from)?.title.clone();
    table_at(&target.sheet, to)?;

    let updated = apply_and_save(
        store,
        &target.sheet,
        EditAction::MoveTable {
            from: from - 1,
            to: to - 1,
        },
    )?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved {} from {} to {}",
        title, from, to
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

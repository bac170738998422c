use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::SheetSelector;
use crate::store::DataStore;

use super::helpers::sheets_by_selectors;

/// Deletes sheets permanently.
pub fn run<S: DataStore>(store: &mut S, selectors: &[SheetSelector]) -> Result<CmdResult> {
    let targets = sheets_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for target in targets {
        store.delete_sheet(&target.sheet.metadata.id)?;
        result.add_message(CmdMessage::success(format!(
            "Cheatsheet deleted ({}): {}",
            target.index,
            target.sheet.name()
        )));
        result.affected_sheets.push(target.sheet);
    }

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::edit::EditAction;
use crate::error::Result;
use crate::index::SheetSelector;
use crate::store::DataStore;

use super::helpers::{apply_and_save, single_sheet};

pub fn rename<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    name: String,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let old_name = target.sheet.name().to_string();
    let updated = apply_and_save(store, &target.sheet, EditAction::Rename(name))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Renamed ({}): {} -> {}",
        target.index,
        old_name,
        updated.name()
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

pub fn describe<S: DataStore>(
    store: &mut S,
    selectors: &[SheetSelector],
    description: String,
) -> Result<CmdResult> {
    let target = single_sheet(store, selectors)?;
    let updated = apply_and_save(store, &target.sheet, EditAction::Describe(description))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Description updated ({}): {}",
        target.index,
        updated.name()
    )));
    Ok(result.with_affected_sheets(vec![updated]))
}

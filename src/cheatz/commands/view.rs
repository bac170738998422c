use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::SheetSelector;
use crate::store::DataStore;

use super::helpers::sheets_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[SheetSelector]) -> Result<CmdResult> {
    let sheets = sheets_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_sheets(sheets))
}

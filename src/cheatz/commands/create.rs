use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheatzError, Result};
use crate::model::{Cheatsheet, Document};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: String, description: String) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CheatzError::Api("Name cannot be empty".into()));
    }

    let sheet = Cheatsheet::new(Document::new(name, description.trim_end()));
    store.save_sheet(&sheet)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cheatsheet created: {}",
        sheet.name()
    )));
    Ok(result.with_affected_sheets(vec![sheet]))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::SheetSelector;
use crate::store::DataStore;

use super::helpers::sheets_by_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[SheetSelector]) -> Result<CmdResult> {
    let sources = sheets_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for source in sources {
        let copy = source.sheet.duplicate();
        store.save_sheet(&copy)?;
        result.add_message(CmdMessage::success(format!(
            "Duplicated ({}): {}",
            source.index,
            copy.name()
        )));
        result.affected_sheets.push(copy);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn duplicates_with_copy_suffix() {
        let mut fixture = StoreFixture::new().with_sheet("Git", 2);
        run(&mut fixture.store, &[SheetSelector::Index(1)]).unwrap();

        let mut names: Vec<_> = fixture
            .store
            .list_sheets()
            .unwrap()
            .into_iter()
            .map(|s| (s.name().to_string(), s.tables().len()))
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![("Git".to_string(), 2), ("Git (Copy)".to_string(), 2)]
        );
    }
}

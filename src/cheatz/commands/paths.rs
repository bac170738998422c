use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::SheetSelector;
use crate::store::DataStore;

use super::helpers::sheets_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[SheetSelector]) -> Result<CmdResult> {
    let sheets = sheets_by_selectors(store, selectors)?;
    let paths = sheets
        .iter()
        .map(|ds| store.sheet_path(&ds.sheet.metadata.id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_paths(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_one_path_per_sheet() {
        let fixture = StoreFixture::new().with_sheet("A", 0).with_sheet("B", 0);
        let result = run(
            &fixture.store,
            &[SheetSelector::Index(1), SheetSelector::Index(2)],
        )
        .unwrap();
        assert_eq!(result.paths.len(), 2);
        assert!(result.paths[0].to_string_lossy().contains("sheet-"));
    }
}

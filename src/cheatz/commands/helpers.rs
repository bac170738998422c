use crate::edit::{self, EditAction};
use crate::error::{CheatzError, Result};
use crate::index::{index_sheets, DisplaySheet, SheetSelector};
use crate::model::{Cheatsheet, Table};
use crate::store::DataStore;

pub fn indexed_sheets<S: DataStore>(store: &S) -> Result<Vec<DisplaySheet>> {
    Ok(index_sheets(store.list_sheets()?))
}

/// Resolves selectors to sheets, in selector order.
///
/// An index must exist. A name selector must match exactly one sheet: an exact
/// (case-insensitive) name wins, otherwise the name fragment must be unambiguous.
pub fn sheets_by_selectors<S: DataStore>(
    store: &S,
    selectors: &[SheetSelector],
) -> Result<Vec<DisplaySheet>> {
    let indexed = indexed_sheets(store)?;
    let mut resolved = Vec::with_capacity(selectors.len());

    for selector in selectors {
        let found = match selector {
            SheetSelector::Index(idx) => indexed
                .iter()
                .find(|ds| ds.index == *idx)
                .ok_or_else(|| CheatzError::Api(format!("Index {} not found", idx)))?,
            SheetSelector::Name(term) => find_by_name(&indexed, term)?,
        };
        resolved.push(found.clone());
    }

    Ok(resolved)
}

fn find_by_name<'a>(indexed: &'a [DisplaySheet], term: &str) -> Result<&'a DisplaySheet> {
    let term_lower = term.to_lowercase();

    if let Some(exact) = indexed
        .iter()
        .find(|ds| ds.sheet.name().to_lowercase() == term_lower)
    {
        return Ok(exact);
    }

    let partial: Vec<&DisplaySheet> = indexed
        .iter()
        .filter(|ds| ds.sheet.name().to_lowercase().contains(&term_lower))
        .collect();

    match partial.as_slice() {
        [one] => Ok(*one),
        [] => Err(CheatzError::Api(format!(
            "No cheatsheet matches \"{}\"",
            term
        ))),
        many => Err(CheatzError::Api(format!(
            "\"{}\" matches {} cheatsheets: {}",
            term,
            many.len(),
            many.iter()
                .map(|ds| format!("{}. {}", ds.index, ds.sheet.name()))
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Resolves exactly one sheet.
pub fn single_sheet<S: DataStore>(store: &S, selectors: &[SheetSelector]) -> Result<DisplaySheet> {
    let mut sheets = sheets_by_selectors(store, selectors)?;
    if sheets.len() != 1 {
        return Err(CheatzError::Api(format!(
            "Expected one cheatsheet, got {}",
            sheets.len()
        )));
    }
    Ok(sheets.remove(0))
}

/// Looks up a table by its 1-based position in the sheet.
pub fn table_at(sheet: &Cheatsheet, position: usize) -> Result<&Table> {
    position
        .checked_sub(1)
        .and_then(|i| sheet.tables().get(i))
        .ok_or_else(|| {
            CheatzError::Api(format!(
                "Table {} not found: \"{}\" has {} tables",
                position,
                sheet.name(),
                sheet.tables().len()
            ))
        })
}

/// Applies an edit and saves the result, returning the saved sheet.
pub fn apply_and_save<S: DataStore>(
    store: &mut S,
    sheet: &Cheatsheet,
    action: EditAction,
) -> Result<Cheatsheet> {
    let updated = edit::apply(sheet, action)?;
    store.save_sheet(&updated)?;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_index_and_exact_name() {
        let fixture = StoreFixture::new()
            .with_sheet("Git", 1)
            .with_sheet("Git Advanced", 1);

        let by_index = sheets_by_selectors(&fixture.store, &[SheetSelector::Index(1)]).unwrap();
        assert_eq!(by_index[0].sheet.name(), "Git Advanced");

        let by_name =
            sheets_by_selectors(&fixture.store, &[SheetSelector::Name("git".into())]).unwrap();
        assert_eq!(by_name[0].sheet.name(), "Git");
    }

    #[test]
    fn ambiguous_fragment_is_an_error() {
        let fixture = StoreFixture::new()
            .with_sheet("Vim motions", 1)
            .with_sheet("Vim registers", 1);

        let err = sheets_by_selectors(&fixture.store, &[SheetSelector::Name("vim".into())])
            .unwrap_err()
            .to_string();
        assert!(err.contains("matches 2 cheatsheets"));

        let unique =
            sheets_by_selectors(&fixture.store, &[SheetSelector::Name("motion".into())]).unwrap();
        assert_eq!(unique[0].sheet.name(), "Vim motions");
    }

    #[test]
    fn missing_index_is_an_error() {
        let fixture = StoreFixture::new().with_sheet("Only", 1);
        assert!(sheets_by_selectors(&fixture.store, &[SheetSelector::Index(2)]).is_err());
    }

    #[test]
    fn table_positions_are_one_based() {
        let fixture = StoreFixture::new().with_sheet("Sheet", 2);
        let sheet = single_sheet(&fixture.store, &[SheetSelector::Index(1)])
            .unwrap()
            .sheet;
        assert_eq!(table_at(&sheet, 1).unwrap().title, "Table 1");
        assert_eq!(table_at(&sheet, 2).unwrap().title, "Table 2");
        assert!(table_at(&sheet, 0).is_err());
        assert!(table_at(&sheet, 3).is_err());
    }
}

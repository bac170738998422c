use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplaySheet;
use crate::store::DataStore;

use super::helpers::indexed_sheets;

/// Lists sheets newest first, or the ones matching `search`.
///
/// Search is case-insensitive over name and description. Exact name matches
/// rank first, then name matches, then description matches; ties go to the
/// shorter name, then the older sheet.
pub fn run<S: DataStore>(store: &S, search: Option<&str>) -> Result<CmdResult> {
    let indexed = indexed_sheets(store)?;

    let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(CmdResult::default().with_listed_sheets(indexed));
    };

    let term_lower = term.to_lowercase();
    let mut matches: Vec<(DisplaySheet, u8)> = indexed
        .into_iter()
        .filter_map(|ds| {
            let name_lower = ds.sheet.name().to_lowercase();
            let description_lower = ds.sheet.document.description.to_lowercase();

            let score = if name_lower == term_lower {
                1
            } else if name_lower.contains(&term_lower) {
                2
            } else if description_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((ds, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| {
        score_a
            .cmp(score_b)
            .then_with(|| a.sheet.name().len().cmp(&b.sheet.name().len()))
            .then_with(|| a.sheet.metadata.created_at.cmp(&b.sheet.metadata.created_at))
    });

    let listed = matches.into_iter().map(|(ds, _)| ds).collect();
    Ok(CmdResult::default().with_listed_sheets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first() {
        let fixture = StoreFixture::new().with_sheet("A", 0).with_sheet("B", 2);
        let result = run(&fixture.store, None).unwrap();
        assert_eq!(result.listed_sheets.len(), 2);
        assert_eq!(result.listed_sheets[0].sheet.name(), "B");
        assert_eq!(result.listed_sheets[0].index, 1);
    }

    #[test]
    fn ranks_search_matches() {
        let fixture = StoreFixture::new()
            .with_sheet("Git Basics", 1)
            .with_described_sheet("Shell", "handy git aliases")
            .with_sheet("Git", 1)
            .with_sheet("Docker", 1);

        let result = run(&fixture.store, Some("GIT")).unwrap();
        let names: Vec<_> = result
            .listed_sheets
            .iter()
            .map(|ds| ds.sheet.name())
            .collect();
        assert_eq!(names, vec!["Git", "Git Basics", "Shell"]);
    }

    #[test]
    fn search_keeps_listing_indexes() {
        let fixture = StoreFixture::new().with_sheet("Vim", 1).with_sheet("Git", 1);
        let result = run(&fixture.store, Some("vim")).unwrap();
        assert_eq!(result.listed_sheets.len(), 1);
        assert_eq!(result.listed_sheets[0].index, 2);
    }

    #[test]
    fn blank_search_lists_everything() {
        let fixture = StoreFixture::new().with_sheet("Vim", 1);
        assert_eq!(run(&fixture.store, Some("  ")).unwrap().listed_sheets.len(), 1);
    }
}

//! # Display Indexes
//!
//! Cheatsheets are stored under UUIDs, but nobody wants to type those. On the
//! command line a sheet is addressed by its position in the listing (`1`, `2`,
//! ...), newest first, or by a fragment of its name.
//!
//! Positions are computed fresh from the store on every call, ordered by
//! `created_at`, so editing a sheet never shifts the numbers around.

use crate::model::Cheatsheet;

/// A user input selecting sheets, either by listing position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl std::fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSelector::Index(idx) => write!(f, "{}", idx),
            SheetSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplaySheet {
    pub sheet: Cheatsheet,
    pub index: usize,
}

/// Assigns 1-based display indexes, newest sheet first.
pub fn index_sheets(mut sheets: Vec<Cheatsheet>) -> Vec<DisplaySheet> {
    sheets.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
    sheets
        .into_iter()
        .enumerate()
        .map(|(i, sheet)| DisplaySheet {
            sheet,
            index: i + 1,
        })
        .collect()
}

/// Parses "3" or a range like "2-4" into 1-based indexes.
pub fn parse_index_or_range(s: &str) -> Result<Vec<usize>, String> {
    if let Some((start, end)) = s.split_once('-') {
        let start = parse_index(start)?;
        let end = parse_index(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        return Ok((start..=end).collect());
    }
    parse_index(s).map(|idx| vec![idx])
}

fn parse_index(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("Indexes start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid index format: {}", s)),
    }
}

/// Turns raw inputs into selectors.
///
/// If every input is an index or range, each becomes an index selector.
/// Otherwise all inputs are joined into one name search, so
/// `cheatz view git basics` looks for a sheet named like "git basics".
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<SheetSelector> {
    let all_indexes: Result<Vec<Vec<usize>>, _> = inputs
        .iter()
        .map(|s| parse_index_or_range(s.as_ref()))
        .collect();

    if let Ok(indexes) = all_indexes {
        return indexes
            .into_iter()
            .flatten()
            .map(SheetSelector::Index)
            .collect();
    }

    let term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    vec![SheetSelector::Name(term)]
}

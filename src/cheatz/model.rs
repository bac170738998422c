use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TABLE_TITLE: &str = "Untitled Table";
pub const DEFAULT_SHEET_NAME: &str = "Untitled Cheatsheet";
pub const IMPORTED_SHEET_NAME: &str = "Imported Cheatsheet";

/// One titled table of a cheatsheet.
///
/// `rows[0]` is the header row when presenting. Rows may be ragged; cell counts
/// are never padded or truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: Uuid,
    pub title: String,
    pub rows: Vec<Vec<String>>,
    /// Raw `|`-split count of the separator line, edge segments included.
    pub column_count: usize,
}

impl Table {
    /// Builds a table from already-split rows, deriving the nominal column count
    /// the same way a `| a | b |` separator line would parse.
    pub fn new(title: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            rows,
            column_count: widest.max(1) + 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Number of cells in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Same content under a fresh id.
    pub fn reissued(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }
}

/// The exchangeable part of a cheatsheet: what markdown import/export carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tables: Vec::new(),
        }
    }

    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    // Mirrored from the document so listings don't need to load bodies
    pub name: String,
    #[serde(default)]
    pub table_count: usize,
}

impl Metadata {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name,
            table_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cheatsheet {
    pub metadata: Metadata,
    pub document: Document,
}

impl Cheatsheet {
    pub fn new(document: Document) -> Self {
        let mut metadata = Metadata::new(document.name.clone());
        metadata.table_count = document.tables.len();
        Self { metadata, document }
    }

    pub fn blank() -> Self {
        Self::new(Document::new(DEFAULT_SHEET_NAME, ""))
    }

    pub fn name(&self) -> &str {
        &self.document.name
    }

    pub fn tables(&self) -> &[Table] {
        &self.document.tables
    }

    /// A copy with its own identity: new ids throughout, fresh timestamps,
    /// and the name marked as a copy.
    pub fn duplicate(&self) -> Self {
        let mut document = self.document.clone();
        document.name = format!("{} (Copy)", self.document.name);
        document.tables = document.tables.iter().map(Table::reissued).collect();
        Self::new(document)
    }

    /// Rebuilds this sheet around `document`, keeping identity and creation time.
    pub fn with_document(&self, document: Document) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.name = document.name.clone();
        metadata.table_count = document.tables.len();
        metadata.updated_at = Utc::now();
        Self { metadata, document }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn new_table_derives_separator_column_count() {
        let table = Table::new("T", vec![row(&["a", "b"]), row(&["c", "d", "e"])]);
        assert_eq!(table.width(), 3);
        assert_eq!(table.column_count, 5);
    }

    #[test]
    fn header_and_body_split_rows() {
        let table = Table::new("T", vec![row(&["h1", "h2"]), row(&["a", "b"])]);
        assert_eq!(table.header().unwrap(), &["h1", "h2"]);
        assert_eq!(table.body().len(), 1);

        let empty = Table::new("T", vec![]);
        assert!(empty.is_empty());
        assert!(empty.header().is_none());
        assert!(empty.body().is_empty());
    }

    #[test]
    fn duplicate_gets_new_identity() {
        let doc = Document::new("Git", "").with_tables(vec![Table::new("T", vec![row(&["a"])])]);
        let sheet = Cheatsheet::new(doc);
        let copy = sheet.duplicate();

        assert_ne!(copy.metadata.id, sheet.metadata.id);
        assert_eq!(copy.name(), "Git (Copy)");
        assert_eq!(copy.metadata.name, "Git (Copy)");
        assert_ne!(copy.tables()[0].id, sheet.tables()[0].id);
        assert_eq!(copy.tables()[0].rows, sheet.tables()[0].rows);
    }

    #[test]
    fn with_document_keeps_identity() {
        let sheet = Cheatsheet::blank();
        let doc = Document::new("Renamed", "desc").with_tables(vec![Table::new("T", vec![])]);
        let updated = sheet.with_document(doc);

        assert_eq!(updated.metadata.id, sheet.metadata.id);
        assert_eq!(updated.metadata.created_at, sheet.metadata.created_at);
        assert_eq!(updated.metadata.name, "Renamed");
        assert_eq!(updated.metadata.table_count, 1);
        assert!(updated.metadata.updated_at >= sheet.metadata.updated_at);
    }
}

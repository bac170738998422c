use super::DataStore;
use crate::error::{CheatzError, Result};
use crate::model::Cheatsheet;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    sheets: HashMap<Uuid, Cheatsheet>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_sheet(&mut self, sheet: &Cheatsheet) -> Result<()> {
        self.sheets.insert(sheet.metadata.id, sheet.clone());
        Ok(())
    }

    fn get_sheet(&self, id: &Uuid) -> Result<Cheatsheet> {
        self.sheets
            .get(id)
            .cloned()
            .ok_or(CheatzError::SheetNotFound(*id))
    }

    fn list_sheets(&self) -> Result<Vec<Cheatsheet>> {
        Ok(self.sheets.values().cloned().collect())
    }

    fn delete_sheet(&mut self, id: &Uuid) -> Result<()> {
        if self.sheets.remove(id).is_none() {
            return Err(CheatzError::SheetNotFound(*id));
        }
        Ok(())
    }

    fn sheet_path(&self, id: &Uuid) -> Result<PathBuf> {
        if !self.sheets.contains_key(id) {
            return Err(CheatzError::SheetNotFound(*id));
        }
        Ok(PathBuf::from(format!("memory://sheet-{}", id)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Document, Table};
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        created: usize,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                created: 0,
            }
        }

        /// Adds a sheet with `tables` one-row tables. Each added sheet is created
        /// one minute after the previous one, so ordering is deterministic.
        pub fn with_sheet(mut self, name: &str, tables: usize) -> Self {
            let tables = (1..=tables)
                .map(|i| {
                    Table::new(
                        format!("Table {}", i),
                        vec![vec![format!("key {}", i), format!("value {}", i)]],
                    )
                })
                .collect();
            let mut sheet = Cheatsheet::new(Document::new(name, "").with_tables(tables));
            let stamp = Utc::now() - Duration::hours(1) + Duration::minutes(self.created as i64);
            sheet.metadata.created_at = stamp;
            sheet.metadata.updated_at = stamp;
            self.created += 1;
            self.store.save_sheet(&sheet).unwrap();
            self
        }

        pub fn with_described_sheet(mut self, name: &str, description: &str) -> Self {
            self = self.with_sheet(name, 1);
            let id = self
                .store
                .sheets
                .values()
                .find(|s| s.name() == name)
                .map(|s| s.metadata.id)
                .unwrap();
            let sheet = self.store.sheets.get_mut(&id).unwrap();
            sheet.document.description = description.to_string();
            self
        }
    }
}

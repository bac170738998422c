use super::DataStore;
use crate::error::{CheatzError, Result};
use crate::model::{Cheatsheet, Document, Metadata};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDEX_FILE: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn body_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("sheet-{}.json", id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<HashMap<Uuid, Metadata>> {
        let data_file = self.root.join(INDEX_FILE);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_metadata(&self, meta: &HashMap<Uuid, Metadata>) -> Result<()> {
        let content = serde_json::to_string_pretty(meta)?;
        fs::write(self.root.join(INDEX_FILE), content)?;
        Ok(())
    }

    fn load_body(&self, metadata: &Metadata) -> Result<Document> {
        let path = self.body_path(&metadata.id);
        if !path.exists() {
            log::warn!(
                "body file missing for sheet {} ({}), using an empty document",
                metadata.id,
                metadata.name
            );
            return Ok(Document::new(metadata.name.clone(), ""));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl DataStore for FileStore {
    fn save_sheet(&mut self, sheet: &Cheatsheet) -> Result<()> {
        self.ensure_dir()?;

        // 1. Update metadata index
        let mut meta_map = self.load_metadata()?;
        meta_map.insert(sheet.metadata.id, sheet.metadata.clone());
        self.save_metadata(&meta_map)?;

        // 2. Write the body
        let body = serde_json::to_string_pretty(&sheet.document)?;
        fs::write(self.body_path(&sheet.metadata.id), body)?;

        log::info!("saved sheet {} ({})", sheet.metadata.id, sheet.name());
        Ok(())
    }

    fn get_sheet(&self, id: &Uuid) -> Result<Cheatsheet> {
        let meta_map = self.load_metadata()?;
        let metadata = meta_map
            .get(id)
            .cloned()
            .ok_or(CheatzError::SheetNotFound(*id))?;
        let document = self.load_body(&metadata)?;
        Ok(Cheatsheet { metadata, document })
    }

    fn list_sheets(&self) -> Result<Vec<Cheatsheet>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let meta_map = self.load_metadata()?;
        let mut sheets = Vec::with_capacity(meta_map.len());
        for metadata in meta_map.into_values() {
            let document = self.load_body(&metadata)?;
            sheets.push(Cheatsheet { metadata, document });
        }
        Ok(sheets)
    }

    fn delete_sheet(&mut self, id: &Uuid) -> Result<()> {
        let mut meta_map = self.load_metadata()?;
        if meta_map.remove(id).is_none() {
            return Err(CheatzError::SheetNotFound(*id));
        }
        self.save_metadata(&meta_map)?;

        let path = self.body_path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        log::info!("deleted sheet {}", id);
        Ok(())
    }

    fn sheet_path(&self, id: &Uuid) -> Result<PathBuf> {
        if !self.load_metadata()?.contains_key(id) {
            return Err(CheatzError::SheetNotFound(*id));
        }
        Ok(self.body_path(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn sample() -> Cheatsheet {
        let table = Table::new(
            "Git",
            vec![
                vec!["cmd".into(), "does".into()],
                vec!["add".into()],
            ],
        );
        Cheatsheet::new(Document::new("Tools", "notes").with_tables(vec![table]))
    }

    #[test]
    fn save_and_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let sheet = sample();
        store.save_sheet(&sheet).unwrap();

        let loaded = store.get_sheet(&sheet.metadata.id).unwrap();
        assert_eq!(loaded.document, sheet.document);
        assert_eq!(loaded.metadata.name, "Tools");
        assert!(dir.path().join("data.json").exists());
        assert!(store.sheet_path(&sheet.metadata.id).unwrap().exists());
    }

    #[test]
    fn list_on_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope"));
        assert!(store.list_sheets().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_metadata_and_body() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let sheet = sample();
        store.save_sheet(&sheet).unwrap();
        let body = store.sheet_path(&sheet.metadata.id).unwrap();

        store.delete_sheet(&sheet.metadata.id).unwrap();
        assert!(!body.exists());
        assert!(store.list_sheets().unwrap().is_empty());
        assert!(matches!(
            store.delete_sheet(&sheet.metadata.id),
            Err(CheatzError::SheetNotFound(_))
        ));
    }

    #[test]
    fn missing_body_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let sheet = sample();
        store.save_sheet(&sheet).unwrap();
        fs::remove_file(store.body_path(&sheet.metadata.id)).unwrap();

        let loaded = store.get_sheet(&sheet.metadata.id).unwrap();
        assert_eq!(loaded.name(), "Tools");
        assert!(loaded.tables().is_empty());
    }
}

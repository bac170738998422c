//! # Storage Layer
//!
//! Cheatsheets are persisted behind the [`DataStore`] trait so the command layer
//! never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata for every sheet in `data.json`
//!   - One body per sheet: `sheet-{uuid}.json`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── data.json             # id -> Metadata (JSON object)
//! ├── sheet-{uuid}.json     # Document body (name, description, tables)
//! └── config.json           # CheatzConfig
//! ```
//!
//! Bodies are kept as JSON rather than markdown so table ids, ragged rows and
//! column counts come back exactly as saved. Markdown is the exchange format,
//! not the storage format.

use crate::error::Result;
use crate::model::Cheatsheet;
use std::path::PathBuf;
use uuid::Uuid;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Save a sheet (create or update)
    fn save_sheet(&mut self, sheet: &Cheatsheet) -> Result<()>;

    fn get_sheet(&self, id: &Uuid) -> Result<Cheatsheet>;

    fn list_sheets(&self) -> Result<Vec<Cheatsheet>>;

    /// Delete a sheet permanently
    fn delete_sheet(&mut self, id: &Uuid) -> Result<()>;

    /// Where the sheet body lives, for file-based stores
    fn sheet_path(&self, id: &Uuid) -> Result<PathBuf>;
}

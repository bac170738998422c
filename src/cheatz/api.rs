//! # API Facade
//!
//! A thin layer over `commands/*.rs` and the single entry point for every
//! cheatz operation, whatever the UI.
//!
//! The facade turns raw user inputs (display indexes, ranges, name fragments)
//! into [`SheetSelector`]s and dispatches to the matching command. It does no
//! I/O of its own and returns structured [`CmdResult`]s, never strings.
//!
//! `CheatzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CheatzApi<FileStore>`
//! - Testing: `CheatzApi<InMemoryStore>`
//!
//! API tests only check dispatch and argument handling. Command behavior is
//! tested in the command modules.

use crate::commands;
use crate::config::CheatzConfig;
use crate::error::Result;
use crate::index::{parse_selectors, SheetSelector};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct CheatzApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
    config: CheatzConfig,
}

impl<S: DataStore> CheatzApi<S> {
    pub fn new(store: S, data_dir: PathBuf, config: CheatzConfig) -> Self {
        Self {
            store,
            data_dir,
            config,
        }
    }

    /// Creates an empty sheet. A missing name falls back to the configured
    /// default name.
    pub fn create_sheet(
        &mut self,
        name: Option<String>,
        description: String,
    ) -> Result<commands::CmdResult> {
        let name = name.unwrap_or_else(|| self.config.default_name.clone());
        commands::create::run(&mut self.store, name, description)
    }

    pub fn list_sheets(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn view_sheets<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, &selectors(inputs))
    }

    pub fn rename_sheet<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        name: String,
    ) -> Result<commands::CmdResult> {
        commands::update::rename(&mut self.store, &selectors(inputs), name)
    }

    pub fn describe_sheet<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        description: String,
    ) -> Result<commands::CmdResult> {
        commands::update::describe(&mut self.store, &selectors(inputs), description)
    }

    pub fn duplicate_sheets<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, &selectors(inputs))
    }

    pub fn delete_sheets<I: AsRef<str>>(&mut self, inputs: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &selectors(inputs))
    }

    pub fn add_table<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        markdown: &str,
    ) -> Result<commands::CmdResult> {
        commands::tables::add(&mut self.store, &selectors(inputs), markdown)
    }

    pub fn replace_table<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        position: usize,
        markdown: &str,
    ) -> Result<commands::CmdResult> {
        commands::tables::replace(&mut self.store, &selectors(inputs), position, markdown)
    }

    pub fn remove_table<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        position: usize,
    ) -> Result<commands::CmdResult> {
        commands::tables::remove(&mut self.store, &selectors(inputs), position)
    }

    pub fn move_table<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        from: usize,
        to: usize,
    ) -> Result<commands::CmdResult> {
        commands::tables::move_table(&mut self.store, &selectors(inputs), from, to)
    }

    pub fn import_paths(&mut self, paths: Vec<PathBuf>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths, &self.config)
    }

    pub fn import_text(&mut self, markdown: &str) -> Result<commands::CmdResult> {
        commands::import::text(&mut self.store, markdown)
    }

    /// Replaces an existing sheet's content with parsed markdown.
    pub fn import_into<I: AsRef<str>>(
        &mut self,
        inputs: &[I],
        markdown: &str,
    ) -> Result<commands::CmdResult> {
        commands::import::into_sheet(&mut self.store, &selectors(inputs), markdown)
    }

    /// Markdown of the selected sheets, or of every sheet when `inputs` is empty.
    pub fn export_markdown<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        commands::export::markdown(&self.store, &selectors(inputs))
    }

    pub fn export_archive<I: AsRef<str>>(
        &self,
        inputs: &[I],
        out_dir: &Path,
    ) -> Result<commands::CmdResult> {
        commands::export::archive(&self.store, &selectors(inputs), out_dir)
    }

    pub fn sheet_paths<I: AsRef<str>>(&self, inputs: &[I]) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, &selectors(inputs))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<SheetSelector> {
    parse_selectors(inputs)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    const TABLE: &str = "| Keys |\n| --- | --- |\n| dd | delete line |";

    fn api() -> CheatzApi<InMemoryStore> {
        CheatzApi::new(
            InMemoryStore::new(),
            PathBuf::from("/nonexistent/cheatz"),
            CheatzConfig::default(),
        )
    }

    #[test]
    fn create_without_name_uses_configured_default() {
        let mut api = api();
        api.config.default_name = "Scratch".to_string();
        let result = api.create_sheet(None, String::new()).unwrap();
        assert_eq!(result.affected_sheets[0].name(), "Scratch");
    }

    #[test]
    fn index_and_name_inputs_reach_the_same_sheet() {
        let mut api = api();
        api.create_sheet(Some("Vim".into()), String::new()).unwrap();
        api.add_table(&["1"], TABLE).unwrap();
        api.add_table(&["vim"], TABLE).unwrap();

        let viewed = api.view_sheets(&["Vim"]).unwrap();
        assert_eq!(viewed.listed_sheets[0].sheet.tables().len(), 2);
    }

    #[test]
    fn table_operations_dispatch() {
        let mut api = api();
        api.create_sheet(Some("Vim".into()), String::new()).unwrap();
        api.add_table(&["1"], TABLE).unwrap();
        api.add_table(&["1"], "| Motions |\n| --- | --- |\n| w | word |")
            .unwrap();

        api.move_table(&["1"], 2, 1).unwrap();
        api.replace_table(&["1"], 2, "| Edits |\n| --- | --- |\n| x | cut |")
            .unwrap();
        api.remove_table(&["1"], 1).unwrap();

        let sheet = &api.view_sheets(&["1"]).unwrap().listed_sheets[0].sheet;
        assert_eq!(sheet.tables().len(), 1);
        assert_eq!(sheet.tables()[0].title, "Edits");
    }

    #[test]
    fn export_without_inputs_covers_everything() {
        let mut api = api();
        api.import_text("# One\n\n| T |\n| --- | --- |\n| a | b |")
            .unwrap();
        api.import_text("# Two\n\n| T |\n| --- | --- |\n| c | d |")
            .unwrap();

        let none: [&str; 0] = [];
        let md = api.export_markdown(&none).unwrap().markdown.unwrap();
        assert!(md.contains("# One"));
        assert!(md.contains("# Two"));
    }

    #[test]
    fn rename_duplicate_delete_dispatch() {
        let mut api = api();
        api.create_sheet(Some("Git".into()), "basics".into()).unwrap();
        api.rename_sheet(&["1"], "Git Basics".into()).unwrap();
        api.describe_sheet(&["1"], "everyday commands".into())
            .unwrap();
        api.duplicate_sheets(&["1"]).unwrap();

        let listed = api.list_sheets(None).unwrap().listed_sheets;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].sheet.name(), "Git Basics (Copy)");
        assert_eq!(listed[1].sheet.document.description, "everyday commands");

        api.delete_sheets(&["1-2"]).unwrap();
        assert!(api.list_sheets(None).unwrap().listed_sheets.is_empty());
    }
}

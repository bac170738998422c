use crate::config::CheatzConfig;
use crate::index::DisplaySheet;
use crate::model::Cheatsheet;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod paths;
pub mod tables;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_sheets: Vec<Cheatsheet>,
    pub listed_sheets: Vec<DisplaySheet>,
    /// Rendered markdown, for commands that export text
    pub markdown: Option<String>,
    pub paths: Vec<PathBuf>,
    pub config: Option<CheatzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_sheets(mut self, sheets: Vec<Cheatsheet>) -> Self {
        self.affected_sheets = sheets;
        self
    }

    pub fn with_listed_sheets(mut self, sheets: Vec<DisplaySheet>) -> Self {
        self.listed_sheets = sheets;
        self
    }

    pub fn with_markdown(mut self, markdown: String) -> Self {
        self.markdown = Some(markdown);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: CheatzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

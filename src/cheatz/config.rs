use crate::error::Result;
use crate::model::DEFAULT_SHEET_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for cheatz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheatzConfig {
    /// Extensions to look for when importing directories (e.g. ".md")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,

    /// Name given to sheets created without one
    #[serde(default = "default_name")]
    pub default_name: String,
}

fn default_import_ext() -> Vec<String> {
    vec![".md".to_string(), ".markdown".to_string(), ".txt".to_string()]
}

fn default_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for CheatzConfig {
    fn default() -> Self {
        Self {
            import_extensions: default_import_ext(),
            default_name: default_name(),
        }
    }
}

impl CheatzConfig {
    pub const KEYS: &'static [&'static str] = &["import-extensions", "default-name"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Display value for a kebab-case key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "import-extensions" => Some(self.import_extensions.join(",")),
            "default-name" => Some(self.default_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "import-extensions" => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err("import-extensions needs at least one extension".to_string());
                }
                self.import_extensions = exts;
                Ok(())
            }
            "default-name" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err("default-name cannot be empty".to_string());
                }
                self.default_name = name.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn matches_import_ext(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .is_some_and(|ext| self.import_extensions.iter().any(|e| e == &ext))
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = CheatzConfig::default();
        assert_eq!(config.import_extensions, vec![".md", ".markdown", ".txt"]);
        assert_eq!(config.default_name, "Untitled Cheatsheet");
    }

    #[test]
    fn test_set_import_extensions_normalizes_dots() {
        let mut config = CheatzConfig::default();
        config.set("import-extensions", "md, .txt,,rst").unwrap();
        assert_eq!(config.import_extensions, vec![".md", ".txt", ".rst"]);
        assert_eq!(config.get("import-extensions").unwrap(), ".md,.txt,.rst");
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = CheatzConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("default-name", "  ").is_err());
        assert!(config.set("import-extensions", ",").is_err());
        assert_eq!(config, CheatzConfig::default());
    }

    #[test]
    fn test_matches_import_ext() {
        let config = CheatzConfig::default();
        assert!(config.matches_import_ext(&PathBuf::from("notes/git.md")));
        assert!(!config.matches_import_ext(&PathBuf::from("notes/git.json")));
        assert!(!config.matches_import_ext(&PathBuf::from("README")));
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CheatzConfig::load(dir.path()).unwrap();
        assert_eq!(config, CheatzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CheatzConfig::default();
        config.set("default-name", "Scratch").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = CheatzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_name, "Scratch");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let parsed: CheatzConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CheatzConfig::default());
    }
}

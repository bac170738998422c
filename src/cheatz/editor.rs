use crate::error::{CheatzError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(CheatzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Splits an editor setting like `code --wait` into program and arguments.
fn split_command(editor: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();
    let (program, args) = split_command(&editor)
        .ok_or_else(|| CheatzError::Api(format!("Invalid editor command '{}'", editor)))?;

    log::debug!("launching {} on {}", editor, path.display());
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| CheatzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(CheatzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Opens `initial` markdown in the editor and returns the edited text.
pub fn edit_markdown(initial: &str, name: &str) -> Result<String> {
    let temp_file = buffer_path(name);
    fs::write(&temp_file, initial)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);
    result
}

/// A temp file path with a `.md` extension, so editors pick up markdown mode.
fn buffer_path(name: &str) -> PathBuf {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-');
    let unique = uuid::Uuid::new_v4().simple().to_string();
    env::temp_dir().join(format!("cheatz-{}-{}.md", slug, &unique[..8]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("vim"), Some(("vim", vec![])));
        assert_eq!(
            split_command("code --wait"),
            Some(("code", vec!["--wait"]))
        );
        assert_eq!(split_command("   "), None);
    }

    #[test]
    fn test_buffer_path_is_markdown_temp_file() {
        let path = buffer_path("Git Basics!");
        assert!(path.starts_with(env::temp_dir()));
        let file = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file.starts_with("cheatz-git-basics-"));
        assert!(file.ends_with(".md"));
        assert_ne!(buffer_path("Git Basics!"), path);
    }
}

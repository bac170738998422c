use crate::error::{CheatzError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard programs to try, in order, for the current OS.
fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
    if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Copies text to the system clipboard using the first available program.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_err = None;

    for (program, args) in candidates() {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                log::debug!("clipboard via {} failed: {}", program, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        CheatzError::Api("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| CheatzError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CheatzError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CheatzError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CheatzError::Api(format!("{} exited with error", program)))
    }
}

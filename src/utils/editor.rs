//! Launch the user's editor on a file.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;
use std::process::Command;

/// Default editor: $EDITOR, then $VISUAL, then a platform fallback.
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` with `requested` (or the default editor) and wait for it.
/// Falls back to the default editor once if the requested one fails.
/// Returns the editor that succeeded.
pub fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<String> {
    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&first).arg(path).status() {
        Ok(s) if s.success() => return Ok(first),
        Ok(s) => tracing::debug!(editor = %first, status = %s, "editor exited with failure"),
        Err(e) => tracing::debug!(editor = %first, error = %e, "editor could not start"),
    }

    if first == fallback {
        return Err(AppError::Other(format!("Editor '{}' failed", first)));
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        first, fallback
    ));

    match Command::new(&fallback).arg(path).status() {
        Ok(s) if s.success() => Ok(fallback),
        _ => Err(AppError::Other(format!(
            "Failed to edit '{}' using fallback '{}'",
            path.display(),
            fallback
        ))),
    }
}

//! Project materializer: turns an in-memory file list into an on-disk tree.
//!
//! One linear pass in list order. Every path is checked before anything is
//! created, so an unsafe template path leaves the filesystem untouched.
//! After that there is no rollback: if a write fails midway, files written
//! earlier stay on disk.

use crate::error::Result;
use crate::fs::{atomic_write_file, ensure_dir};
use crate::pattern::TemplateFile;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `files` under `root`, creating `root` and every parent directory as
/// needed. Existing files are overwritten.
///
/// Returns the number of files written.
pub fn materialize(root: &Path, files: &[TemplateFile]) -> Result<usize> {
    let targets = files
        .iter()
        .map(|file| -> Result<PathBuf> { Ok(root.join(file.relative_path()?)) })
        .collect::<Result<Vec<PathBuf>>>()?;

    ensure_dir(root)?;

    let mut written = 0;
    for (file, target) in files.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        atomic_write_file(target, &file.content)?;
        debug!(path = %target.display(), bytes = file.content.len(), "wrote file");
        written += 1;
    }

    Ok(written)
}

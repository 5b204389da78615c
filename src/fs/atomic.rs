//! Atomic file writes.
//!
//! Every write follows the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! A generated file is therefore either absent, its previous content, or its
//! complete new content; it is never half-written. On crash a temporary file
//! named `.{filename}.tmp` may remain next to the target.
//!
//! The parent directory must already exist.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, replacing any existing file.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::filesystem(path, e)
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::filesystem(path, e)
    })?;

    #[cfg(unix)]
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target.file_name().ok_or_else(|| {
        ScaffoldError::UserError(format!("'{}' does not name a file", target.display()))
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(filename);
    temp_name.push(".tmp");
    Ok(parent.join(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

//! Filesystem utilities.
//!
//! Atomic writes for generated files and recursive directory creation that
//! reports the offending path on failure.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::Path;

/// Create `path` and every missing ancestor. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ScaffoldError::filesystem(path, e))
}

/// Whether `path` is missing or an empty directory.
///
/// Fails with `UserError` if `path` exists but is not a directory.
pub fn is_missing_or_empty_dir(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    if !path.is_dir() {
        return Err(ScaffoldError::UserError(format!(
            "output path '{}' exists and is not a directory",
            path.display()
        )));
    }

    let mut entries = fs::read_dir(path).map_err(|e| ScaffoldError::filesystem(path, e))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn ensure_dir_creates_nested_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_a_file_is_in_the_way() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("src");
        fs::write(&blocker, "not a dir").unwrap();

        let err = ensure_dir(&blocker.join("tools")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[test]
    fn empty_and_missing_directories_are_reported() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_missing_or_empty_dir(temp_dir.path()).unwrap());
        assert!(is_missing_or_empty_dir(&temp_dir.path().join("nope")).unwrap());

        fs::write(temp_dir.path().join("keep.txt"), "x").unwrap();
        assert!(!is_missing_or_empty_dir(temp_dir.path()).unwrap());
    }

    #[test]
    fn regular_file_is_not_a_valid_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = is_missing_or_empty_dir(&file).unwrap_err();
        assert!(matches!(err, ScaffoldError::UserError(_)));
    }
}

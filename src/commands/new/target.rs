//! Output directory checks for `new`.

use crate::error::{Result, ScaffoldError};
use crate::fs::is_missing_or_empty_dir;
use std::path::Path;
use tracing::warn;

/// Check that `path` can receive a new project.
///
/// A missing or empty directory is always accepted. A non-empty directory is
/// accepted only with `force`. Anything other than a directory is rejected.
pub(super) fn check_target(path: &Path, force: bool) -> Result<()> {
    if is_missing_or_empty_dir(path)? {
        return Ok(());
    }

    if force {
        warn!(path = %path.display(), "output directory is not empty, overwriting");
        return Ok(());
    }

    Err(ScaffoldError::UserError(format!(
        "output directory '{}' is not empty (use --force to overwrite existing files)",
        path.display()
    )))
}

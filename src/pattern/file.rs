//! The template file model: a relative path plus raw content.

use crate::error::{Result, ScaffoldError};
use std::path::{Component, Path, PathBuf};

/// One file of a pattern's project tree.
///
/// `path` is relative to the generated project root and uses `/` separators.
/// `content` may contain `{{PLACEHOLDER}}` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the path as a checked relative path.
    ///
    /// Fails with `UnsafePath` if the path is empty, absolute, or contains a
    /// `..` component.
    pub fn relative_path(&self) -> Result<&Path> {
        validate_relative_path(&self.path)
    }

    /// Key used for duplicate detection; `./a/./b` and `a//b` collapse to `a/b`.
    pub(crate) fn normalized_path(&self) -> PathBuf {
        Path::new(&self.path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

/// Check that a template path stays inside the project root.
pub fn validate_relative_path(path: &str) -> Result<&Path> {
    let candidate = Path::new(path);
    let mut has_name = false;

    for component in candidate.components() {
        match component {
            Component::Normal(_) => has_name = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ScaffoldError::UnsafePath(path.to_string()));
            }
        }
    }

    // "" and "." would resolve to the root itself
    if !has_name {
        return Err(ScaffoldError::UnsafePath(path.to_string()));
    }

    Ok(candidate)
}

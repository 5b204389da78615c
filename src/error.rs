//! Error types for agent-starterkit.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffolding operations.
///
/// Each variant maps to a specific exit code. The core never recovers from
/// any of these; they propagate to `main` and end the invocation.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The requested pattern identifier is not registered.
    #[error("unknown pattern '{0}' (available: {known})", known = crate::pattern::PatternId::known_ids())]
    UnknownPattern(String),

    /// The project name contains characters outside `[A-Za-z0-9_-]`.
    #[error(
        "invalid project name '{0}': only letters, numbers, hyphens, and underscores are allowed"
    )]
    InvalidProjectName(String),

    /// Two template files in one composed pattern claim the same relative path.
    #[error("pattern '{pattern}' contains more than one template for '{path}'")]
    DuplicatePath { pattern: String, path: String },

    /// A template path is absolute or climbs out of the project root.
    #[error("template path '{0}' escapes the project root")]
    UnsafePath(String),

    /// Directory creation or file write failed.
    #[error("filesystem error at '{}': {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Build a `Filesystem` error for the given path.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::UserError(_)
            | ScaffoldError::UnknownPattern(_)
            | ScaffoldError::InvalidProjectName(_) => exit_codes::USER_ERROR,
            ScaffoldError::DuplicatePath { .. } | ScaffoldError::UnsafePath(_) => {
                exit_codes::COMPOSITION_FAILURE
            }
            ScaffoldError::Filesystem { .. } => exit_codes::FILESYSTEM_FAILURE,
        }
    }
}

/// Result type alias for scaffolding operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

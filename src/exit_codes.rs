//! Exit code constants for the agent-starterkit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown pattern, invalid name, config problems)
//! - 2: Composition failure (duplicate or unsafe template paths)
//! - 3: Filesystem failure (directory creation or file write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown pattern, invalid project name, or bad config.
pub const USER_ERROR: i32 = 1;

/// Composition failure: a pattern's template set is internally inconsistent.
pub const COMPOSITION_FAILURE: i32 = 2;

/// Filesystem failure: a directory could not be created or a file could not be written.
pub const FILESYSTEM_FAILURE: i32 = 3;

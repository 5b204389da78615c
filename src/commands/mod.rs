//! Command implementations for agent-starterkit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod new;
mod patterns;

use crate::cli::Command;
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// `config_path` is the global `--config` flag; commands that read
/// configuration resolve it themselves.
pub fn dispatch(command: Command, config_path: Option<&Path>) -> Result<()> {
    match command {
        Command::New(args) => new::cmd_new(args, config_path),
        Command::Patterns => patterns::cmd_patterns(),
    }
}

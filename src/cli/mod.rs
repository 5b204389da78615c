//! CLI argument parsing for agent-starterkit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scaffold starter projects for LLM agent patterns.
///
/// Each pattern is a complete TypeScript project blueprint: package and
/// compiler config, an agent entry point, tools, guardrails, and tests.
#[derive(Parser, Debug)]
#[command(name = "agent-starterkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: ./starterkit.yaml when present).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands for agent-starterkit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new agent project.
    ///
    /// Writes the selected pattern's files under the output directory,
    /// creating it if needed.
    #[command(alias = "generate")]
    New(NewArgs),

    /// List available patterns.
    #[command(alias = "list")]
    Patterns,
}

/// Arguments for the `new` command.
#[derive(Parser, Debug, Default)]
pub struct NewArgs {
    /// Pattern to generate (e.g. augmented-llm).
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Project name (letters, numbers, hyphens, and underscores).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory (default: ./<name>).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prompt for pattern, name, and output directory.
    #[arg(short, long)]
    pub interactive: bool,

    /// Generate into a non-empty directory, overwriting existing files.
    #[arg(long)]
    pub force: bool,

    /// Print the files that would be generated without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

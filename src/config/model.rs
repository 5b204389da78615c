//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for project generation.
///
/// This struct represents the contents of `starterkit.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Defaults for `new`
    // =========================================================================
    /// Pattern used when `--pattern` is not given (default: "augmented-llm").
    #[serde(default = "default_pattern")]
    pub default_pattern: String,

    /// Project name used when `--name` is not given (default: "my-agent-project").
    #[serde(default = "default_name")]
    pub default_name: String,

    /// Output directory used when `--output` is not given.
    /// When unset, the project lands in `./<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_output: Option<PathBuf>,

    // =========================================================================
    // Template settings
    // =========================================================================
    /// Extra `{{PLACEHOLDER}}` values. Keys are UPPER_SNAKE_CASE and may not
    /// shadow the built-in variables.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// Glob patterns of template paths to leave out of the generated project.
    #[serde(default)]
    pub exclude: Vec<String>,

    // =========================================================================
    // History
    // =========================================================================
    /// NDJSON file that receives one event per successful generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pattern: default_pattern(),
            default_name: default_name(),
            default_output: None,
            variables: BTreeMap::new(),
            exclude: Vec::new(),
            history_file: None,
        }
    }
}

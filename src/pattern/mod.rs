//! Pattern registry and composer.
//!
//! A pattern is a named blueprint for a complete starter project. Each pattern
//! is built from independent sub-generators (package/config, agent, tools,
//! guardrails, tests) whose outputs are concatenated in that fixed order.
//!
//! The registry is the closed [`PatternId`] enum: adding a variant without a
//! factory arm in [`PatternId::config`] fails to compile.

/// Embed a template payload from `templates/<pattern>/<path>` at compile time.
///
/// The relative path inside the pattern directory is also the path the file
/// gets in the generated project.
macro_rules! embedded {
    ($pattern:literal, $path:literal) => {
        $crate::pattern::TemplateFile::new(
            $path,
            include_str!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/templates/",
                $pattern,
                "/",
                $path
            )),
        )
    };
}

mod augmented_llm;
mod file;


pub use file::TemplateFile;

use crate::error::{Result, ScaffoldError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Identifier of a registered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    /// Augmented LLM: a single agent enhanced with tools, memory, and guardrails.
    AugmentedLlm,
}

impl PatternId {
    /// Every registered pattern, in display order.
    pub const ALL: &'static [PatternId] = &[PatternId::AugmentedLlm];

    /// The identifier users type on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::AugmentedLlm => "augmented-llm",
        }
    }

    /// Comma-separated list of every registered identifier.
    pub fn known_ids() -> String {
        Self::ALL
            .iter()
            .map(PatternId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build this pattern's composed configuration.
    pub fn config(self) -> Result<PatternConfig> {
        match self {
            PatternId::AugmentedLlm => augmented_llm::pattern(),
        }
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScaffoldError::UnknownPattern(s.to_string()))
    }
}

/// A composed pattern: display metadata plus the ordered file list.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    pub id: PatternId,
    /// Human-readable name (e.g. "Augmented LLM").
    pub name: String,
    pub description: String,
    /// Files in composition order; no two share a path.
    pub files: Vec<TemplateFile>,
}

/// Resolve a pattern identifier string into its composed configuration.
///
/// Fails with `UnknownPattern` when `id` is not registered.
pub fn resolve(id: &str) -> Result<PatternConfig> {
    id.parse::<PatternId>()?.config()
}

/// Concatenate sub-generator outputs, rejecting any path claimed twice.
///
/// Groups are consumed in the order given; file order inside each group is
/// preserved.
pub fn compose<I>(pattern: PatternId, groups: I) -> Result<Vec<TemplateFile>>
where
    I: IntoIterator<Item = Vec<TemplateFile>>,
{
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for group in groups {
        for file in group {
            if !seen.insert(file.normalized_path()) {
                return Err(ScaffoldError::DuplicatePath {
                    pattern: pattern.to_string(),
                    path: file.path,
                });
            }
            files.push(file);
        }
    }

    debug!(pattern = %pattern, files = files.len(), "composed pattern");
    Ok(files)
}

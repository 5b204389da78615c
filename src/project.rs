//! Project generation: validated options in, file tree on disk out.
//!
//! Pipeline: resolve pattern → compose files → substitute placeholders per
//! file → materialize under the output path → report the count.
//!
//! All validation (pattern identifier, project name) happens while building
//! [`ProjectOptions`], before anything touches the filesystem.

use crate::error::{Result, ScaffoldError};
use crate::materialize::materialize;
use crate::pattern::{PatternId, TemplateFile};
use crate::template::{TemplateVars, substitute, unresolved_placeholders};
use globset::GlobSet;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, info};

static PROJECT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid project name regex"));

/// A project name restricted to `[A-Za-z0-9_-]+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self> {
        if !PROJECT_NAME_REGEX.is_match(name) {
            return Err(ScaffoldError::InvalidProjectName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The validated `{pattern, name, output_path}` triple.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub pattern: PatternId,
    pub name: ProjectName,
    /// Relative or absolute; created if missing.
    pub output_path: PathBuf,
}

impl ProjectOptions {
    /// Validate raw caller input.
    ///
    /// Fails with `UnknownPattern` or `InvalidProjectName`.
    pub fn new(pattern: &str, name: &str, output_path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            pattern: pattern.parse()?,
            name: ProjectName::new(name)?,
            output_path: output_path.into(),
        })
    }
}

/// Optional additions to a generation run.
#[derive(Debug, Clone, Default)]
pub struct Customization {
    /// Extra placeholder values. The required variables always take precedence.
    pub variables: BTreeMap<String, String>,
    /// Template paths matching this set are skipped.
    pub exclude: Option<GlobSet>,
}

/// The rendered file set for one run, before anything is written.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub pattern: PatternId,
    /// Display name of the pattern.
    pub pattern_name: String,
    /// Files with placeholders substituted, in composition order.
    pub files: Vec<TemplateFile>,
    /// Template paths skipped by the exclude set.
    pub excluded: Vec<String>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub pattern: PatternId,
    pub output_path: PathBuf,
    pub files_written: usize,
    pub excluded: Vec<String>,
}

/// Resolve the pattern and render every file without touching the filesystem.
pub fn plan_project(options: &ProjectOptions, custom: &Customization) -> Result<ProjectPlan> {
    let pattern = options.pattern.config()?;

    let mut vars: TemplateVars = custom
        .variables
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let required = TemplateVars::required(
        options.name.as_str(),
        &pattern.description,
        pattern.id.as_str(),
    );
    for name in crate::template::REQUIRED_VARIABLES {
        if let Some(value) = required.get(name) {
            vars.insert(*name, value);
        }
    }
    debug!(variables = vars.len(), "template variables ready");

    let mut files = Vec::with_capacity(pattern.files.len());
    let mut excluded = Vec::new();

    for file in pattern.files {
        if custom
            .exclude
            .as_ref()
            .is_some_and(|set| set.is_match(&file.path))
        {
            debug!(path = %file.path, "excluded by config");
            excluded.push(file.path);
            continue;
        }

        let content = substitute(&file.content, &vars);
        let leftover = unresolved_placeholders(&content);
        if !leftover.is_empty() {
            debug!(path = %file.path, placeholders = ?leftover, "placeholders left as-is");
        }
        files.push(TemplateFile::new(file.path, content));
    }

    Ok(ProjectPlan {
        pattern: pattern.id,
        pattern_name: pattern.name,
        files,
        excluded,
    })
}

/// Generate the project described by `options`.
///
/// Returns the number of files written; any failure is a hard stop with no
/// cleanup of files already written.
pub fn generate_project(
    options: &ProjectOptions,
    custom: &Customization,
) -> Result<GenerationReport> {
    let plan = plan_project(options, custom)?;
    let files_written = materialize(&options.output_path, &plan.files)?;

    info!(
        pattern = %plan.pattern,
        output = %options.output_path.display(),
        files = files_written,
        "generated project"
    );

    Ok(GenerationReport {
        pattern: plan.pattern,
        output_path: options.output_path.clone(),
        files_written,
        excluded: plan.excluded,
    })
}

#[cfg(test)]
mod tests;

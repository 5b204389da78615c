//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ScaffoldError};
use crate::pattern::PatternId;
use crate::project::{Customization, ProjectName};
use crate::template::{is_reserved, is_valid_variable_name};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScaffoldError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find and load the effective config.
    ///
    /// An explicit path must exist. Otherwise `starterkit.yaml` in the current
    /// directory is used when present, and defaults when it is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let implicit = Path::new(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config");
            return Self::load(implicit);
        }

        debug!("no config file, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_pattern` must be a registered pattern
    /// - `default_name` must be a valid project name
    /// - `variables` keys must be UPPER_SNAKE_CASE and not a built-in variable
    /// - `exclude` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.default_pattern.parse::<PatternId>().is_err() {
            return Err(ScaffoldError::UserError(format!(
                "config validation failed: default_pattern '{}' is not a known pattern (available: {})",
                self.default_pattern,
                PatternId::known_ids()
            )));
        }

        if ProjectName::new(&self.default_name).is_err() {
            return Err(ScaffoldError::UserError(format!(
                "config validation failed: default_name '{}' may only contain letters, numbers, hyphens, and underscores",
                self.default_name
            )));
        }

        for name in self.variables.keys() {
            if !is_valid_variable_name(name) {
                return Err(ScaffoldError::UserError(format!(
                    "config validation failed: variable '{}' must be UPPER_SNAKE_CASE",
                    name
                )));
            }
            if is_reserved(name) {
                return Err(ScaffoldError::UserError(format!(
                    "config validation failed: variable '{}' is set by the generator and cannot be overridden",
                    name
                )));
            }
        }

        self.exclude_globset()?;

        Ok(())
    }

    /// Compile `exclude` into a matcher. `None` when nothing is excluded.
    pub fn exclude_globset(&self) -> Result<Option<GlobSet>> {
        if self.exclude.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            let glob = Glob::new(pattern).map_err(|e| {
                ScaffoldError::UserError(format!(
                    "config validation failed: invalid exclude glob '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|e| {
            ScaffoldError::UserError(format!(
                "config validation failed: failed to build exclude set: {}",
                e
            ))
        })?;
        Ok(Some(set))
    }

    /// The per-run additions this config contributes to generation.
    pub fn customization(&self) -> Result<Customization> {
        Ok(Customization {
            variables: self.variables.clone(),
            exclude: self.exclude_globset()?,
        })
    }
}

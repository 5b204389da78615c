//! Placeholder substitution for template payloads.
//!
//! # Syntax
//!
//! - `{{NAME}}` - replaced by the value of variable `NAME` when it is defined
//! - any other `{{...}}` - left untouched
//!
//! Unknown placeholders are not an error: generated files may legitimately
//! contain look-alike text (for example a JSX style object or a regex
//! quantifier such as `{20,}`).
//!
//! Substitution is a single left-to-right pass, so a variable value that
//! itself contains `{{...}}` is emitted verbatim and never re-expanded.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Project name as typed by the user.
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// `"<pattern description> project"`.
pub const PROJECT_DESCRIPTION: &str = "PROJECT_DESCRIPTION";

/// Pattern identifier, e.g. `augmented-llm`.
pub const PATTERN_NAME: &str = "PATTERN_NAME";

/// Variables every pattern can rely on.
pub const REQUIRED_VARIABLES: &[&str] = &[PROJECT_NAME, PROJECT_DESCRIPTION, PATTERN_NAME];

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("Invalid placeholder regex")
});

static VARIABLE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Invalid variable name regex"));

/// Placeholder name to value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars {
    values: BTreeMap<String, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the variable set every pattern expects.
    pub fn required(project_name: &str, pattern_description: &str, pattern_id: &str) -> Self {
        let mut vars = Self::new();
        vars.insert(PROJECT_NAME, project_name);
        vars.insert(
            PROJECT_DESCRIPTION,
            format!("{} project", pattern_description),
        );
        vars.insert(PATTERN_NAME, pattern_id);
        vars
    }

    /// Set a variable, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateVars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

/// Whether `name` is one of the variables the generator always sets.
pub fn is_reserved(name: &str) -> bool {
    REQUIRED_VARIABLES.contains(&name)
}

/// Whether `name` is usable as a placeholder name (`UPPER_SNAKE_CASE`).
pub fn is_valid_variable_name(name: &str) -> bool {
    VARIABLE_NAME_REGEX.is_match(name)
}

/// Replace every `{{NAME}}` whose `NAME` is defined in `vars`.
///
/// # Examples
///
/// ```ignore
/// let vars = TemplateVars::from_iter([("PROJECT_NAME", "acme")]);
/// assert_eq!(substitute(r#""name": "{{PROJECT_NAME}}""#, &vars), r#""name": "acme""#);
/// ```
pub fn substitute(content: &str, vars: &TemplateVars) -> String {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find("{{") {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let replacement = after_open
            .find("}}")
            .and_then(|close| vars.get(&after_open[..close]).map(|v| (close, v)));

        match replacement {
            Some((close, value)) => {
                result.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Emit one brace and rescan so `{{{NAME}}}` still matches at the next offset.
                result.push('{');
                rest = &rest[open + 1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// List the distinct `{{UPPER_CASE}}` placeholders still present in `content`.
pub fn unresolved_placeholders(content: &str) -> Vec<String> {
    let mut names: Vec<String> = PLACEHOLDER_REGEX
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

//! Constants and default value functions used by the Config struct.

use crate::pattern::PatternId;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "starterkit.yaml";

pub fn default_pattern() -> String {
    PatternId::AugmentedLlm.as_str().to_string()
}

pub fn default_name() -> String {
    "my-agent-project".to_string()
}

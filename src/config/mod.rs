//! Configuration model for agent-starterkit.
//!
//! This module defines the Config struct that represents `starterkit.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::DEFAULT_CONFIG_FILE;

//! Generation history log.
//!
//! When `history_file` is configured, every successful generation appends one
//! event in NDJSON format (one JSON object per line).
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (`generate`)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `details`: Freeform object with action-specific details
//!
//! # Usage
//!
//! ```ignore
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Generate)
//!     .with_details(json!({"pattern": "augmented-llm", "name": "demo"}));
//! append_event(Path::new("history.ndjson"), &event)?;
//! ```

use crate::error::{Result, ScaffoldError};
use crate::fs::ensure_dir;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A project was generated.
    Generate,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Generate => write!(f, "generate"),
        }
    }
}

/// An event record for the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ScaffoldError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the history file at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line with a trailing newline.
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScaffoldError::filesystem(path, e))?;

    writeln!(file, "{}", json_line).map_err(|e| ScaffoldError::filesystem(path, e))?;
    file.sync_all()
        .map_err(|e| ScaffoldError::filesystem(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Generate);

        assert_eq!(event.action, EventAction::Generate);
        assert!(event.actor.contains('@'));
        assert!(event.details.is_object());
        assert!(event.details.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_event_with_details() {
        let event = Event::new(EventAction::Generate)
            .with_details(json!({"pattern": "augmented-llm", "files_written": 18}));

        assert_eq!(event.details["pattern"], "augmented-llm");
        assert_eq!(event.details["files_written"], 18);
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new(EventAction::Generate).with_details(json!({"name": "demo"}));

        let line = event.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["action"], "generate");
        assert_eq!(parsed["details"]["name"], "demo");
        assert!(parsed["ts"].is_string());
    }

    #[test]
    fn test_append_event_creates_file_and_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".starterkit").join("history.ndjson");

        append_event(&path, &Event::new(EventAction::Generate)).unwrap();

        assert!(path.exists());
        assert_eq!(read_lines(&path).len(), 1);
    }

    #[test]
    fn test_append_event_multiple_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.ndjson");

        for name in ["one", "two", "three"] {
            let event = Event::new(EventAction::Generate).with_details(json!({"name": name}));
            append_event(&path, &event).unwrap();
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        let last: Event = serde_json::from_str(&lines[2]).unwrap();
        assert_eq!(last.details["name"], "three");
    }

    #[test]
    fn test_append_event_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.ndjson");

        append_event(&path, &Event::new(EventAction::Generate)).unwrap();

        assert!(fs::read_to_string(&path).unwrap().ends_with('\n'));
    }

    #[test]
    fn test_append_event_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = append_event(temp_dir.path(), &Event::new(EventAction::Generate)).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }

    #[test]
    fn test_event_action_display() {
        assert_eq!(EventAction::Generate.to_string(), "generate");
    }

    #[test]
    fn test_event_full_roundtrip() {
        let event = Event::new(EventAction::Generate)
            .with_details(json!({"output": "./demo", "files_excluded": 0}));

        let line = event.to_ndjson_line().unwrap();
        let parsed: Event = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed.action, event.action);
        assert_eq!(parsed.actor, event.actor);
        assert_eq!(parsed.details, event.details);
    }
}

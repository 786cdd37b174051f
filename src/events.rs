//! Launch journal for bglaunch.
//!
//! Every launch attempt is appended to `launches.ndjson` in the log
//! directory, one JSON object per line. The journal is the launcher's own
//! record; the child's output only ever goes to its log file.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: `launch` or `launch_failed`
//! - `actor`: The invoking user (e.g., `user@HOST`)
//! - `pid`: Child process ID, present for successful launches
//! - `details`: `command`, `log_file`, and `error` where applicable

use crate::context::LaunchContext;
use crate::error::{LaunchError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Child process spawned
    Launch,
    /// Spawn was refused by the OS
    LaunchFailed,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so width specifiers line up history columns.
        f.pad(match self {
            EventAction::Launch => "launch",
            EventAction::LaunchFailed => "launch_failed",
        })
    }
}

/// An event record for the launch journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The user who ran the launcher (e.g., `user@HOST`).
    pub actor: String,

    /// Child process ID for successful launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,

    /// Freeform details object.
    #[serde(default)]
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action, stamped now.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            pid: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Read a string field from `details`.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(|v| v.as_str())
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            LaunchError::FilesystemError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the launch journal.
///
/// The log directory must already exist; the journal file is created on
/// first use.
pub fn append_event(ctx: &LaunchContext, event: &Event) -> Result<()> {
    let journal = ctx.journal_file();
    let json_line = event.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&journal)
        .map_err(|e| {
            LaunchError::FilesystemError(format!(
                "failed to open launch journal '{}': {}",
                journal.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        LaunchError::FilesystemError(format!(
            "failed to write event to '{}': {}",
            journal.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read up to `count` of the most recent events, oldest first.
///
/// Lines that fail to parse are skipped; a missing journal yields no events.
pub fn read_last_events(path: &Path, count: usize) -> Vec<Event> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    let mut parsed: Vec<Event> = content
        .lines()
        .rev()
        .filter_map(|line| serde_json::from_str::<Event>(line).ok())
        .take(count)
        .collect();
    parsed.reverse();
    parsed
}

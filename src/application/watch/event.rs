//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

/// How long the event stream waits before re-checking the running flag
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory watched recursively
    pub root: PathBuf,
}

impl WatchOptions {
    /// Create new watch options for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { root: String },
    /// A file changed and a push was triggered
    FileChanged { path: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// What the watcher did with one change event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDisposition {
    /// File could not be read (deleted, directory, mid-write)
    Unreadable,
    /// Content matches the last recorded fingerprint
    Unchanged,
    /// Novel content, cache updated, push triggered
    Triggered,
    /// Novel content while an invocation was in flight; nothing recorded
    DroppedWhileBusy,
}

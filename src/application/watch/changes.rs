//! Filesystem change events
//!
//! Wraps a `notify` watcher as a lazy, non-restartable iterator of change
//! events. The iterator ends when the running flag is cleared or the
//! watcher goes away.

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;

use chrono::{DateTime, Local};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{ShellError, ShellResult};

use super::event::POLL_INTERVAL;

/// One observed change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub observed_at: DateTime<Local>,
}

impl ChangeEvent {
    pub fn now(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            observed_at: Local::now(),
        }
    }
}

/// Stream of content-change events under a root directory
pub struct ChangeEvents {
    _watcher: RecommendedWatcher,
    rx: Receiver<PathBuf>,
    root: PathBuf,
    running: Arc<AtomicBool>,
}

impl ChangeEvents {
    /// Start watching `root` recursively
    pub fn watch(root: &Path, running: Arc<AtomicBool>) -> ShellResult<Self> {
        let root = root.canonicalize().map_err(|e| ShellError::Watch {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) if is_content_change(&event.kind) => {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "watch error"),
            },
            Config::default(),
        )
        .map_err(|e| ShellError::Watch {
            path: root.clone(),
            message: e.to_string(),
        })?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .map_err(|e| ShellError::Watch {
                path: root.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(root = %root.display(), "watching directory");

        Ok(Self {
            _watcher: watcher,
            rx,
            root,
            running,
        })
    }

    /// Canonical watch root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for ChangeEvents {
    type Item = ChangeEvent;

    fn next(&mut self) -> Option<ChangeEvent> {
        while self.running.load(Ordering::SeqCst) {
            match self.rx.recv_timeout(POLL_INTERVAL) {
                Ok(path) if is_hidden(&self.root, &path) => {
                    tracing::trace!(path = %path.display(), "ignoring dot-path");
                }
                Ok(path) => return Some(ChangeEvent::now(path)),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
        None
    }
}

/// Writes and newly created files; access and removal events are ignored
fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}

/// True when any component below `root` starts with a dot
pub fn is_hidden(root: &Path, path: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

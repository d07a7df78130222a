//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::application::invoke::SyncInvoker;
use crate::domain::fingerprint::{Fingerprint, FingerprintCache};
use crate::domain::operation::Direction;
use crate::domain::ports::SyncTool;
use crate::error::{ShellError, ShellResult};

use super::changes::{ChangeEvent, ChangeEvents};
use super::event::{ChangeDisposition, WatchEvent, WatchOptions};

/// Watch Use Case
///
/// Pushes whenever a file under the root gets content it did not have
/// before. This is the main entry point for `clasp-shell sync --watch`.
pub struct WatchUseCase<'a, T: SyncTool> {
    options: WatchOptions,
    invoker: &'a SyncInvoker<T>,
    cache: FingerprintCache,
    root: PathBuf,
    in_flight: Option<JoinHandle<()>>,
}

impl<'a, T: SyncTool + 'static> WatchUseCase<'a, T> {
    /// Create a new WatchUseCase
    pub fn new(options: WatchOptions, invoker: &'a SyncInvoker<T>) -> Self {
        let root = options.root.clone();
        Self {
            options,
            invoker,
            cache: FingerprintCache::new(),
            root,
            in_flight: None,
        }
    }

    pub fn cache(&self) -> &FingerprintCache {
        &self.cache
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false, then waits
    /// for an in-flight push before returning.
    pub fn start<F>(mut self, running: Arc<AtomicBool>, on_event: F) -> ShellResult<()>
    where
        F: Fn(WatchEvent),
    {
        let events = ChangeEvents::watch(&self.options.root, running)?;
        self.root = events.root().to_path_buf();

        on_event(WatchEvent::WatchStarted {
            root: self.options.root.display().to_string(),
        });

        self.run(events, &on_event);
        self.wait_for_in_flight();

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Consume change events until the sequence ends
    pub fn run<I, F>(&mut self, events: I, on_event: &F)
    where
        I: IntoIterator<Item = ChangeEvent>,
        F: Fn(WatchEvent),
    {
        for event in events {
            let disposition = self.handle_change(&event.path, on_event);
            tracing::trace!(
                path = %event.path.display(),
                observed_at = %event.observed_at,
                ?disposition,
                "change handled"
            );
        }
    }

    /// Decide what one change event means and act on it
    pub fn handle_change<F>(&mut self, path: &Path, on_event: &F) -> ChangeDisposition
    where
        F: Fn(WatchEvent),
    {
        if path.is_dir() {
            return ChangeDisposition::Unreadable;
        }

        let content = match read_changed(path) {
            Ok(content) => content,
            Err(err) if err.is_transient() => {
                tracing::debug!(path = %path.display(), error = %err, "skipping vanished change");
                return ChangeDisposition::Unreadable;
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable change");
                return ChangeDisposition::Unreadable;
            }
        };

        let fingerprint = Fingerprint::of(&content);
        if !self.cache.is_novel(path, &fingerprint) {
            return ChangeDisposition::Unchanged;
        }

        // The fingerprint stays unrecorded here, so the same content is
        // treated as novel again once the invoker is idle.
        if self.invoker.is_busy() {
            tracing::debug!(path = %path.display(), "change while busy, not recorded");
            return ChangeDisposition::DroppedWhileBusy;
        }

        on_event(WatchEvent::FileChanged {
            path: self.display_path(path),
        });
        self.cache.set(path, fingerprint);

        if let Some(handle) = self.invoker.trigger(Direction::Push) {
            self.in_flight = Some(handle);
        }
        ChangeDisposition::Triggered
    }

    /// Block until the most recent push has finished
    pub fn wait_for_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if handle.join().is_err() {
                tracing::warn!("push worker panicked");
            }
        }
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn read_changed(path: &Path) -> ShellResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| ShellError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

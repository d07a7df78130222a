//! Invocation Event Port
//!
//! Reports the progress and result of external tool invocations.
//! Enables colored console output, NDJSON event streams, and test recording.

use serde::Serialize;

use crate::domain::diagnostics::{SyncSummary, SyntaxErrorLocator};
use crate::domain::excerpt::SourceExcerptWindow;
use crate::domain::operation::Operation;

/// What a successful invocation produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuccessReport {
    /// Parsed push/pull output
    Sync(SyncSummary),
    /// Raw stdout of a passthrough command
    Passthrough { stdout: String },
}

/// Event emitted when an invocation finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InvocationEvent {
    /// The tool exited successfully
    #[serde(rename = "invocation_succeeded")]
    Succeeded {
        operation: Operation,
        report: SuccessReport,
    },

    /// The tool failed; `detail` explains why a syntax error could not be
    /// shown as an excerpt
    #[serde(rename = "invocation_failed")]
    Failed {
        operation: Operation,
        diagnostics: String,
        detail: Option<String>,
    },

    /// The tool reported a syntax error that maps to a local file
    SyntaxError {
        operation: Operation,
        locator: SyntaxErrorLocator,
        excerpt: SourceExcerptWindow,
    },
}

impl InvocationEvent {
    pub fn operation(&self) -> &Operation {
        match self {
            InvocationEvent::Succeeded { operation, .. }
            | InvocationEvent::Failed { operation, .. }
            | InvocationEvent::SyntaxError { operation, .. } => operation,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InvocationEvent::Succeeded { .. })
    }
}

/// Stops a progress indicator when dropped
///
/// The stop action runs exactly once, either through [`ProgressHandle::stop`]
/// or on drop (including unwinding).
#[must_use = "dropping the handle stops the progress indicator immediately"]
pub struct ProgressHandle {
    stop: Option<Box<dyn FnOnce() + Send>>,
}

impl ProgressHandle {
    pub fn new(stop: impl FnOnce() + Send + 'static) -> Self {
        Self {
            stop: Some(Box::new(stop)),
        }
    }

    /// Handle for sinks without a visual indicator
    pub fn noop() -> Self {
        Self { stop: None }
    }

    pub fn stop(mut self) {
        self.run_stop();
    }

    fn run_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.run_stop();
    }
}

/// Trait for receiving invocation events
///
/// Implementations can be:
/// - ConsoleSink: spinner plus colored banners
/// - JsonSink: NDJSON event stream
/// - NoopInvocationSink: silent operation
pub trait InvocationSink: Send + Sync {
    /// An invocation is starting; the returned handle stops its indicator
    fn started(&self, operation: &Operation) -> ProgressHandle;

    /// An invocation finished
    fn finished(&self, event: InvocationEvent);
}

/// No-op sink for silent operation
pub struct NoopInvocationSink;

impl InvocationSink for NoopInvocationSink {
    fn started(&self, _operation: &Operation) -> ProgressHandle {
        ProgressHandle::noop()
    }

    fn finished(&self, _event: InvocationEvent) {}
}

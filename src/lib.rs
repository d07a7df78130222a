//! clasp-shell - colorized wrapper around the clasp sync tool
//!
//! Runs `clasp push`/`pull` (and any other subcommand) one at a time,
//! renders their output, shows an excerpt of the local source when the
//! remote reports a syntax error, and can push automatically whenever a
//! watched file gets new content.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{InvokerOptions, SyncInvoker, WatchEvent, WatchOptions, WatchUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::operation::{Direction, Operation};
pub use domain::ports::{InvocationEvent, InvocationSink, SyncTool, ToolOutput};
pub use error::{ShellError, ShellResult};
pub use infrastructure::{JsonEventSink, ProcessTool};

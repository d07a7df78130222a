//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (parsing, excerpts, fingerprints, ports)
//! - Does NOT contain parsing rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncInvoker` - Single-flight push/pull/passthrough invocations
//! - `WatchUseCase` - Pushes when watched files get new content

pub mod invoke;
pub mod watch;

pub use invoke::{InvokerOptions, SyncInvoker};
pub use watch::{ChangeDisposition, WatchEvent, WatchOptions, WatchUseCase};

//! Watch Use Case
//!
//! This module implements change-triggered pushes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate), skipping dot-paths
//! - Content fingerprinting to drop no-op writes
//! - Single-flight pushes through the `SyncInvoker`
//!
//! ## Architecture
//!
//! - `ChangeEvents` - Lazy iterator of filesystem change events
//! - `WatchUseCase` - The coordinating loop
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(WatchOptions::new("."), &invoker);
//! use_case.start(running, |event| { ... })?;
//! ```

mod changes;
mod event;
mod use_case;


pub use changes::{is_hidden, ChangeEvent, ChangeEvents};
pub use event::{ChangeDisposition, WatchEvent, WatchOptions, POLL_INTERVAL};
pub use use_case::WatchUseCase;

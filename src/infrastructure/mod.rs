//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and stream I/O.
//!
//! ## Structure
//!
//! - `process/` - The external sync tool as a child process
//! - `events/` - Machine-readable event sinks

pub mod events;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::{ProcessTool, DEFAULT_PROGRAM};

//! Event Sink Implementations
//!
//! Provides concrete implementations of InvocationSink:
//! - JsonEventSink: NDJSON output for scripts and editors
//!
//! The colored console sink lives with the CLI's UI code.

mod json;

pub use json::JsonEventSink;

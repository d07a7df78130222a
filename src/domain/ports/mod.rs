//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the CLI provide concrete implementations.

pub mod invocation_events;
pub mod sync_tool;

pub use invocation_events::{
    InvocationEvent, InvocationSink, NoopInvocationSink, ProgressHandle, SuccessReport,
};
pub use sync_tool::{SyncTool, ToolOutput};

//! Invoke Module
//!
//! Single-flight execution of the external sync tool.
//!
//! ## Structure
//!
//! - `options` - Where local sources live (`InvokerOptions`)
//! - `use_case` - The guarded invoker and result interpretation (`SyncInvoker`)
//!
//! ## Usage
//!
//! ```ignore
//! use clasp_shell::application::invoke::{InvokerOptions, SyncInvoker};
//!
//! let invoker = SyncInvoker::new(tool, sink, InvokerOptions::new(cwd));
//! if let Some(handle) = invoker.trigger(Direction::Push) {
//!     let _ = handle.join();
//! }
//! ```

mod options;
mod use_case;

pub use options::{InvokerOptions, DEFAULT_EXTENSION};
pub use use_case::{execute, interpret, SyncInvoker};

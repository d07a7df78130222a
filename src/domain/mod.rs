//! Domain Layer
//!
//! Pure logic with no process or terminal access:
//! - `fingerprint` - content digests and the change-detection cache
//! - `run_state` - the single-flight busy flag
//! - `operation` - push/pull/passthrough invocations
//! - `diagnostics` - parsing of the external tool's output
//! - `excerpt` - source context window around a syntax error
//! - `ports` - traits implemented by infrastructure and the CLI

pub mod diagnostics;
pub mod excerpt;
pub mod fingerprint;
pub mod operation;
pub mod ports;
pub mod run_state;

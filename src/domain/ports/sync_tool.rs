//! External Sync Tool Port
//!
//! The sync binary is opaque: it receives arguments and answers with a
//! success flag and two text streams.

use crate::error::ShellResult;

/// Captured result of one external tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Diagnostic text for a failed run (stderr, or stdout when stderr is empty)
    pub fn diagnostics(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Runs the external sync tool
///
/// Implementations:
/// - ProcessTool: spawns the configured binary
/// - test doubles returning canned output
pub trait SyncTool: Send + Sync {
    /// Run the tool with `args` and wait for it to exit.
    ///
    /// Returns `Err` only when the tool could not be started at all; a
    /// non-zero exit is reported through `ToolOutput::success`.
    fn run(&self, args: &[String]) -> ShellResult<ToolOutput>;

    /// Program name, for banners and logs
    fn program(&self) -> &str;
}

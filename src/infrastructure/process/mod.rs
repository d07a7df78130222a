//! Process Sync Tool
//!
//! Runs the external sync binary as a child process and captures both
//! output streams as (lossy) UTF-8 text.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::domain::ports::{SyncTool, ToolOutput};
use crate::error::{ShellError, ShellResult};

/// Default external sync binary
pub const DEFAULT_PROGRAM: &str = "clasp";

/// Sync tool backed by a real executable on `PATH`
#[derive(Debug, Clone)]
pub struct ProcessTool {
    program: String,
    leading_args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            working_dir: None,
        }
    }

    /// Split a configured command such as `npx clasp` on whitespace; the
    /// first word is the program, the rest precede every invocation's args.
    /// Blank input falls back to the default program.
    pub fn from_command_line(line: &str) -> Self {
        let mut words = line.split_whitespace().map(str::to_string);
        match words.next() {
            Some(program) => Self {
                program,
                leading_args: words.collect(),
                working_dir: None,
            },
            None => Self::default(),
        }
    }

    /// Run the tool from `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.leading_args.iter().map(String::as_str))
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ProcessTool {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl SyncTool for ProcessTool {
    fn run(&self, args: &[String]) -> ShellResult<ToolOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args).args(args).stdin(Stdio::null());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| ShellError::Spawn {
            command: self.command_line(args),
            source,
        })?;

        tracing::debug!(
            command = %self.command_line(args),
            status = ?output.status.code(),
            "external tool exited"
        );

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn program(&self) -> &str {
        &self.program
    }
}

//! Common test utilities for clasp-shell CLI tests.
//!
//! `TestEnv` gives each test an isolated project and config directory and
//! a fake `clasp` written as a shell script.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a clasp-shell command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    tool: Option<String>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
            tool: None,
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file below the project root, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Use `script` (a POSIX shell body) as the external tool
    pub fn with_fake_tool(mut self, script: &str) -> Self {
        let path = self.home_dir.path().join("fake-clasp.sh");
        fs::write(&path, script).unwrap();
        self.tool = Some(format!("sh {}", path.display()));
        self
    }

    /// Command line of the fake tool, for writing into config files
    pub fn tool_command(&self) -> &str {
        self.tool.as_deref().expect("fake tool not configured")
    }

    /// Run clasp-shell from the project root with deterministic output settings
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_clasp-shell"));
        cmd.current_dir(self.project_root.path())
            .args(["--color", "never", "--no-animation"])
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("LANG", "en_US.UTF-8")
            .env("TERM", "xterm")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG")
            .env_remove("CLASP_SHELL_EXTENSION")
            .env_remove("CLASP_SHELL_COLOR");

        match &self.tool {
            Some(tool) => cmd.env("CLASP_SHELL_TOOL", tool),
            None => cmd.env_remove("CLASP_SHELL_TOOL"),
        };
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }
}

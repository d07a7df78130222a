//! Error types for clasp-shell
//!
//! Library code returns [`ShellResult`]; the binary wraps everything in
//! `anyhow` at the command boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for clasp-shell operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for clasp-shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// A local file could not be read (deleted, mid-write, wrong extension)
    #[error("could not read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external tool could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The filesystem watcher could not be set up
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// Config file is not valid TOML or has wrongly typed values
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl ShellError {
    /// A local read that raced with the file being deleted or rewritten
    pub fn is_transient(&self) -> bool {
        match self {
            ShellError::FileRead { source, .. } => matches!(
                source.kind(),
                std::io::ErrorKind::NotFound
                    | std::io::ErrorKind::Interrupted
                    | std::io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }
}

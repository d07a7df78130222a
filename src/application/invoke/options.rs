//! Invoker Options

use std::path::PathBuf;

use crate::domain::diagnostics::SyntaxErrorLocator;

/// Default extension of local source files (remote `.gs` maps to local `.js`)
pub const DEFAULT_EXTENSION: &str = "js";

/// Where local sources live, for mapping syntax errors back to files
#[derive(Debug, Clone)]
pub struct InvokerOptions {
    /// Directory that reported file paths are relative to
    pub source_root: PathBuf,
    /// Extension appended to reported file paths
    pub extension: String,
}

impl InvokerOptions {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the local extension (a leading dot is ignored)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Local path of the file named by a syntax error report
    pub fn local_path(&self, locator: &SyntaxErrorLocator) -> PathBuf {
        self.source_root
            .join(format!("{}.{}", locator.file_path, self.extension))
    }
}

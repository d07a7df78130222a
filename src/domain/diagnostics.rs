//! Parsing of the external tool's text output
//!
//! Success output is scanned for tree-branch change entries and a file count.
//! Failure output is scanned for a syntax error report carrying a
//! `line: <n>` and `file: <path>` locator.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Marker that prefixes per-file entries in the tool's success output
pub const TREE_BRANCH: &str = "└─";

/// Substring (case-insensitive) that flags a remote syntax error
pub const SYNTAX_ERROR_MARKER: &str = "syntax error";

/// Largest line number accepted from a syntax error report
pub const MAX_LINE_NUMBER: usize = u32::MAX as usize;

static FILE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+) file").expect("file count regex must compile"));

static LINE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)line: (\d+)").expect("line token regex must compile"));

static FILE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)file: ([\w/\\]+)").expect("file token regex must compile"));

/// One per-file entry of a successful sync, split around the branch marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    /// Text before the marker (usually indentation)
    pub lead: String,
    /// Text after the marker (usually " <file name>")
    pub entry: String,
}

impl ChangeLine {
    /// Rebuild the line with `glyph` in place of the branch marker
    pub fn with_glyph(&self, glyph: &str) -> String {
        format!("{}{}{}", self.lead, glyph, self.entry)
    }
}

/// Parsed stdout of a successful sync
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    /// `None` when no `<n> file` token was printed
    pub changed_file_count: Option<u64>,
    pub change_lines: Vec<ChangeLine>,
}

/// Parse the stdout of a successful push or pull
///
/// Lines holding the branch marker become change entries; every other line
/// is checked for a `<n> file` token and the last one found wins.
pub fn parse_success_output(stdout: &str) -> SyncSummary {
    let mut summary = SyncSummary::default();

    for line in stdout.lines() {
        if let Some((lead, entry)) = line.split_once(TREE_BRANCH) {
            summary.change_lines.push(ChangeLine {
                lead: lead.to_string(),
                entry: entry.to_string(),
            });
        } else if let Some(count) = FILE_COUNT_RE
            .captures(line)
            .and_then(|caps| caps[1].parse::<u64>().ok())
        {
            summary.changed_file_count = Some(count);
        }
    }

    summary
}

/// Location of a remote syntax error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxErrorLocator {
    /// Path as reported, without the local extension
    pub file_path: String,
    /// 1-based line number
    pub line_number: usize,
}

/// Why a syntax error line could not be turned into a locator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticError {
    #[error("no 'line: <number>' token in syntax error report")]
    MissingLine,
    #[error("no 'file: <path>' token in syntax error report")]
    MissingFile,
    #[error("line number '{0}' is not a positive integer in range")]
    InvalidLine(String),
}

/// Outcome of scanning failure diagnostics for a syntax error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorScan {
    /// No line mentions a syntax error
    Absent,
    /// A syntax error line with both tokens
    Located(SyntaxErrorLocator),
    /// A syntax error line whose tokens are missing or malformed
    Malformed { line: String, error: DiagnosticError },
}

/// Parsed stderr of a failed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub raw_diagnostics: String,
    pub syntax: SyntaxErrorScan,
}

impl FailureReport {
    pub fn syntax_error(&self) -> Option<&SyntaxErrorLocator> {
        match &self.syntax {
            SyntaxErrorScan::Located(locator) => Some(locator),
            _ => None,
        }
    }
}

/// Parse the stderr of a failed invocation
///
/// The first line containing "syntax error" (any case) decides the result.
pub fn parse_failure_diagnostics(stderr: &str) -> FailureReport {
    let syntax = stderr
        .lines()
        .find(|line| line.to_lowercase().contains(SYNTAX_ERROR_MARKER))
        .map(|line| match locate_syntax_error(line) {
            Ok(locator) => SyntaxErrorScan::Located(locator),
            Err(error) => SyntaxErrorScan::Malformed {
                line: line.to_string(),
                error,
            },
        })
        .unwrap_or(SyntaxErrorScan::Absent);

    FailureReport {
        raw_diagnostics: stderr.to_string(),
        syntax,
    }
}

/// Extract the locator tokens from a single syntax error line
pub fn locate_syntax_error(line: &str) -> Result<SyntaxErrorLocator, DiagnosticError> {
    let line_token = LINE_TOKEN_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or(DiagnosticError::MissingLine)?;

    let file_path = FILE_TOKEN_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .ok_or(DiagnosticError::MissingFile)?;

    let line_number = line_token
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_LINE_NUMBER).contains(n))
        .ok_or(DiagnosticError::InvalidLine(line_token))?;

    Ok(SyntaxErrorLocator {
        file_path,
        line_number,
    })
}

//! Source excerpt window around a reported line
//!
//! Five slots: two lines above, the reported line (marked), two below.
//! Slots that fall outside the file are placeholders.

use std::path::Path;

use serde::Serialize;

use crate::error::{ShellError, ShellResult};

/// Lines shown on each side of the reported line
pub const CONTEXT_LINES: usize = 2;

/// Placeholder shown in the number column for slots outside the file
pub const PLACEHOLDER: &str = "*";

/// One slot of the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcerptRow {
    /// 1-based line number this slot stands for (may be < 1)
    pub number: i64,
    /// Line text, `None` when the slot is outside the file
    pub text: Option<String>,
    /// The reported line
    pub marked: bool,
}

impl ExcerptRow {
    pub fn is_placeholder(&self) -> bool {
        self.text.is_none()
    }

    /// Plain `<number> | <text>` rendering, number right-aligned to `width`
    pub fn format(&self, width: usize) -> String {
        match &self.text {
            Some(text) => format!("{:>width$} | {}", self.number, text, width = width),
            None => format!("{:>width$} |", PLACEHOLDER, width = width),
        }
    }
}

/// Context window around a syntax error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceExcerptWindow {
    rows: Vec<ExcerptRow>,
    number_width: usize,
}

impl SourceExcerptWindow {
    /// Read `path` and build the window centered on `line` (1-based)
    pub fn load(path: &Path, line: usize) -> ShellResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| ShellError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(&String::from_utf8_lossy(&bytes), line))
    }

    /// Build the window from file content already in memory
    pub fn from_source(source: &str, line: usize) -> Self {
        let lines: Vec<&str> = source
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();

        let span = CONTEXT_LINES as i64;
        let center = i64::try_from(line).unwrap_or(i64::MAX).min(i64::MAX - span);

        let rows = (center - span..=center + span)
            .map(|number| {
                let text = usize::try_from(number - 1)
                    .ok()
                    .and_then(|index| lines.get(index))
                    .map(|text| text.to_string());
                ExcerptRow {
                    number,
                    text,
                    marked: number == center,
                }
            })
            .collect();

        let number_width = (center + span).to_string().len();

        Self { rows, number_width }
    }

    pub fn rows(&self) -> &[ExcerptRow] {
        &self.rows
    }

    /// Width of the line-number column
    pub fn number_width(&self) -> usize {
        self.number_width
    }

    pub fn marked_row(&self) -> Option<&ExcerptRow> {
        self.rows.iter().find(|row| row.marked)
    }
}

//! What the console attached to stdout can show
//!
//! Spinner redraws need a TTY outside CI. Arc frames and ✓/✕ glyphs need a
//! UTF-8 locale. Environment lookups go through a `get_env` closure.

use is_terminal::IsTerminal;

/// Column count assumed when the console size cannot be queried
pub const FALLBACK_WIDTH: u16 = 80;

/// Environment variables set by common CI runners
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
];

/// Locale variables in lookup order; the first one set decides
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    /// Columns available to the spinner line
    pub width: u16,
}

impl TerminalCapabilities {
    /// Whether an in-place spinner line can be redrawn and cleared
    pub fn can_redraw(&self) -> bool {
        self.is_tty && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    inspect(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok().map(|(cols, _rows)| cols),
    )
}

fn inspect(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    columns: Option<u16>,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !no_color,
        supports_unicode: !dumb && locale_is_utf8(&get_env),
        is_ci: CI_MARKERS.iter().any(|key| get_env(key).is_some()),
        width: columns.filter(|c| *c > 0).unwrap_or(FALLBACK_WIDTH),
    }
}

fn locale_is_utf8(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_VARS
        .iter()
        .find_map(|key| get_env(key))
        .map(|locale| {
            let locale = locale.to_ascii_lowercase();
            locale.is_empty() || locale.contains("utf-8") || locale.contains("utf8")
        })
        .unwrap_or(true)
}

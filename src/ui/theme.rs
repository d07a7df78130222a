use crossterm::style::Color;

/// Design tokens for the clasp-shell terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✕";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = ">";

    // Per-file change markers.
    pub const PUSHED: &str = "↻";
    pub const PULLED: &str = "↺";

    pub const WATCH: &str = "⎋";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";

    pub const PUSHED: &str = "^";
    pub const PULLED: &str = "v";

    pub const WATCH: &str = "[~]";
}

/// Spinner frames, advanced every `SPINNER_INTERVAL_MS`
pub mod spinner {
    pub const FRAMES: &[char] = &['◜', '◝', '◟', '◞'];
    pub const FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];
}

pub const SPINNER_INTERVAL_MS: u64 = 40;

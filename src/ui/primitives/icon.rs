use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pointer,
    Pushed,
    Pulled,
    Watch,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Pushed) => theme::icons::PUSHED,
            (true, Icon::Pulled) => theme::icons::PULLED,
            (true, Icon::Watch) => theme::icons::WATCH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Pushed) => theme::icons_ascii::PUSHED,
            (false, Icon::Pulled) => theme::icons_ascii::PULLED,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let styled = match self {
            Icon::Success | Icon::Pushed => s.with(theme::colors::SUCCESS),
            Icon::Error => s.with(theme::colors::ERROR),
            Icon::Pointer => s.with(theme::colors::ERROR).bold(),
            Icon::Warning | Icon::Pulled => s.with(theme::colors::WARNING),
            Icon::Watch => s.with(theme::colors::INFO),
        };
        format!("{}", styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Pushed.render(false), "^");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Pushed.render(true), "↻");
        assert_eq!(Icon::Pulled.render(true), "↺");
    }

    #[test]
    fn colored_without_color_is_plain_glyph() {
        assert_eq!(Icon::Error.colored(false, true), "✕");
        assert!(Icon::Error.colored(true, true).contains("\u{1b}["));
    }
}

use clasp_shell::domain::excerpt::{ExcerptRow, SourceExcerptWindow};
use clasp_shell::domain::operation::Operation;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Syntax error banner followed by the five-row source window
pub fn render_syntax_error(
    operation: &Operation,
    excerpt: &SourceExcerptWindow,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {} {}\n\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{} failed because of", operation.command_text()))
            .render(supports_color),
        ColoredText::error("syntax error").bold().render(supports_color)
    );

    for row in excerpt.rows() {
        out.push_str(&render_row(row, excerpt.number_width(), supports_color));
        out.push('\n');
    }
    out.push('\n');
    out
}

fn render_row(row: &ExcerptRow, width: usize, supports_color: bool) -> String {
    let text = row.format(width);
    if row.marked {
        // the pointer is always '>' so the column layout never shifts
        format!(" {} {}", Icon::Pointer.colored(supports_color, true), text)
    } else {
        format!("   {}", ColoredText::dim(text).render(supports_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_row_gets_pointer_and_context_is_indented() {
        let source = (1..=10)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let excerpt = SourceExcerptWindow::from_source(&source, 5);

        let rendered = render_syntax_error(&Operation::push(), &excerpt, false, true);
        assert_eq!(
            rendered,
            "✕ push failed because of syntax error\n\n\
             \x20  3 | line 3\n\
             \x20  4 | line 4\n\
             \x20> 5 | line 5\n\
             \x20  6 | line 6\n\
             \x20  7 | line 7\n\n"
        );
    }

    #[test]
    fn placeholders_render_with_star() {
        let excerpt = SourceExcerptWindow::from_source("only line", 1);
        let rendered = render_syntax_error(&Operation::pull(), &excerpt, false, true);
        let rows: Vec<&str> = rendered.lines().skip(2).take(5).collect();
        assert_eq!(rows, vec!["   * |", "   * |", " > 1 | only line", "   * |", "   * |"]);
    }

    #[test]
    fn colored_pointer_is_red_and_bold() {
        let excerpt = SourceExcerptWindow::from_source("a\nb\nc", 2);
        let rendered = render_syntax_error(&Operation::push(), &excerpt, true, true);
        assert!(rendered.contains("\u{1b}[1m"));
        assert!(rendered.contains("2 | b"));
    }
}

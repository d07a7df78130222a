use clasp_shell::domain::diagnostics::SyncSummary;
use clasp_shell::domain::operation::{Direction, Operation};
use clasp_shell::domain::ports::{InvocationEvent, SuccessReport};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::excerpt::render_syntax_error;

/// Render the final report of one invocation
pub fn render_invocation_event(
    event: &InvocationEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match event {
        InvocationEvent::Succeeded {
            operation: Operation::Sync { direction },
            report: SuccessReport::Sync(summary),
        } => render_sync_success(*direction, summary, supports_color, supports_unicode),
        InvocationEvent::Succeeded {
            operation, report, ..
        } => {
            let stdout = match report {
                SuccessReport::Passthrough { stdout } => stdout.as_str(),
                SuccessReport::Sync(_) => "",
            };
            render_passthrough_success(operation, stdout, supports_color, supports_unicode)
        }
        InvocationEvent::Failed {
            operation,
            diagnostics,
            detail,
        } => render_failure(
            operation,
            diagnostics,
            detail.as_deref(),
            supports_color,
            supports_unicode,
        ),
        InvocationEvent::SyntaxError {
            operation, excerpt, ..
        } => render_syntax_error(operation, excerpt, supports_color, supports_unicode),
    }
}

fn render_sync_success(
    direction: Direction,
    summary: &SyncSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let check = Icon::Success.colored(supports_color, supports_unicode);
    let verb = ColoredText::success(direction.past_tense()).render(supports_color);
    let mut out = match summary.changed_file_count {
        Some(count) => format!(
            "{} {} {} {}\n",
            check,
            verb,
            ColoredText::success(count.to_string()).bold().render(supports_color),
            ColoredText::success("files").render(supports_color)
        ),
        None => format!("{} {}\n", check, verb),
    };

    let glyph = match direction {
        Direction::Push => Icon::Pushed,
        Direction::Pull => Icon::Pulled,
    }
    .colored(supports_color, supports_unicode);

    for line in &summary.change_lines {
        out.push_str(&format!(
            "{}{}{}\n",
            ColoredText::dim(&line.lead).render(supports_color),
            glyph,
            ColoredText::dim(&line.entry).render(supports_color)
        ));
    }
    out.push('\n');
    out
}

fn render_passthrough_success(
    operation: &Operation,
    stdout: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(operation.command_text()).render(supports_color)
    );
    out.push_str(stdout);
    if !stdout.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_failure(
    operation: &Operation,
    diagnostics: &str,
    detail: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let cross = Icon::Error.colored(supports_color, supports_unicode);
    let banner = match operation {
        Operation::Sync { direction } => ColoredText::error(format!(
            "{} failed",
            direction.subcommand()
        ))
        .render(supports_color),
        Operation::Passthrough { .. } => format!(
            "{} {}",
            ColoredText::error("failed when running").render(supports_color),
            ColoredText::error(operation.command_text())
                .bold()
                .render(supports_color)
        ),
    };

    let mut out = format!("{} {}\n", cross, banner);
    if matches!(operation, Operation::Passthrough { .. }) {
        out.push('\n');
    }
    let diagnostics = diagnostics.trim_end();
    if !diagnostics.is_empty() {
        out.push_str(diagnostics);
        out.push('\n');
    }
    if let Some(detail) = detail {
        out.push_str(&ColoredText::dim(detail).render(supports_color));
        out.push('\n');
    }
    out
}

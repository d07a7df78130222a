use std::path::Path;

use clasp_shell::application::watch::WatchEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_event(event: &WatchEvent, supports_color: bool, supports_unicode: bool) -> String {
    match event {
        WatchEvent::WatchStarted { root } => format!(
            "{} {} {} {}\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            ColoredText::dim("watching").render(supports_color),
            ColoredText::plain(directory_label(root))
                .bold()
                .render(supports_color),
            ColoredText::dim("for changes").render(supports_color)
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {}\n",
            ColoredText::dim("changes from").render(supports_color),
            ColoredText::plain(path).bold().render(supports_color)
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {}\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            ColoredText::dim("watch stopped").render(supports_color)
        ),
    }
}

/// Last path component, falling back to the full text for `.` and `/`
fn directory_label(root: &str) -> String {
    let path = Path::new(root);
    let resolved = if root == "." {
        std::env::current_dir().ok()
    } else {
        None
    };
    resolved
        .as_deref()
        .unwrap_or(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string())
}

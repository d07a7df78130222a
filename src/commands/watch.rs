use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clasp_shell::application::watch::{WatchOptions, WatchUseCase};

use crate::ui::views::watch::render_watch_event;

use super::{GlobalArgs, Session};

/// `push --watch`: push whenever a file under the watch root changes
pub fn cmd_watch(args: GlobalArgs) -> Result<bool> {
    let session = Session::load(args)?;
    let (invoker, _tracker) = session.invoker();
    let ui = session.ui;

    let root = session.cwd.join(&session.config.watch.root);
    let options = WatchOptions::new(&root);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let use_case = WatchUseCase::new(options, &invoker);
    use_case.start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
        } else {
            print!("{}", render_watch_event(&event, ui.color, ui.unicode));
        }
    })?;

    Ok(true)
}

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use unicode_width::UnicodeWidthChar;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            current: 0,
            message: message.into(),
        }
    }

    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        format!("{} {}", frame, self.message)
    }
}

fn frames(supports_unicode: bool) -> &'static [char] {
    if supports_unicode {
        theme::spinner::FRAMES
    } else {
        theme::spinner::FRAMES_ASCII
    }
}

/// Cut `line` to at most `width` terminal columns
pub fn fit_to_width(line: &str, width: u16) -> &str {
    let max = width as usize;
    let mut used = 0;
    for (idx, ch) in line.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > max {
            return &line[..idx];
        }
    }
    line
}

/// Redraws a [`Spinner`] on the current stdout line until stopped
///
/// Stopping (explicitly or on drop) joins the ticker thread and clears
/// the line so the next output starts at column 0.
pub struct SpinnerTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SpinnerTicker {
    pub fn start(message: impl Into<String>, ui_color: bool, ui_unicode: bool, width: u16) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let mut spinner = Spinner::new(message);
        // leave the last column free so the cursor never wraps
        let width = width.saturating_sub(1).max(1);

        let handle = thread::spawn(move || {
            let mut out = io::stdout();
            while !flag.load(Ordering::SeqCst) {
                let frame = spinner.render(ui_unicode);
                let line = ColoredText::dim(fit_to_width(&frame, width)).render(ui_color);
                if redraw(&mut out, &line).is_err() {
                    break;
                }
                spinner.tick();
                thread::sleep(Duration::from_millis(theme::SPINNER_INTERVAL_MS));
            }
            let _ = redraw(&mut out, "");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SpinnerTicker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn redraw(out: &mut impl Write, content: &str) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(Print(content))?;
    out.flush()
}

//! Console reporting of invocations

use std::io::{self, Write};
use std::sync::Mutex;

use clasp_shell::domain::operation::Operation;
use clasp_shell::domain::ports::{InvocationEvent, InvocationSink, ProgressHandle};

use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::sync::render_invocation_event;
use crate::ui::widgets::spinner::SpinnerTicker;

/// Spinner while the tool runs, themed banners when it finishes
pub struct ConsoleSink {
    ui: UiContext,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

impl InvocationSink for ConsoleSink {
    fn started(&self, operation: &Operation) -> ProgressHandle {
        let label = operation.progress_label();
        if self.ui.animation {
            let ticker =
                SpinnerTicker::start(label, self.ui.color, self.ui.unicode, self.ui.caps.width);
            return ProgressHandle::new(move || ticker.stop());
        }

        self.write(&format!("{}\n", ColoredText::dim(label).render(self.ui.color)));
        ProgressHandle::noop()
    }

    fn finished(&self, event: InvocationEvent) {
        self.write(&render_invocation_event(&event, self.ui.color, self.ui.unicode));
    }
}

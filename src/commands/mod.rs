//! Command handlers
//!
//! Each handler loads configuration, resolves the UI context and wires the
//! process-backed tool to a console or JSON sink.

pub mod sync;
pub mod watch;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clasp_shell::application::invoke::{InvokerOptions, SyncInvoker};
use clasp_shell::config::Config;
use clasp_shell::domain::operation::Operation;
use clasp_shell::domain::ports::{InvocationEvent, InvocationSink, ProgressHandle};
use clasp_shell::infrastructure::{JsonEventSink, ProcessTool};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleSink;
use crate::ui::views::config::render_config_warning;

/// Global flags shared by every command
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub no_animation: bool,
}

/// Working directory, merged configuration and resolved UI context
pub struct Session {
    pub cwd: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    pub fn load(args: GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let (config, warnings) = Config::load_or_default(Some(&cwd));
        let ui = UiContext::new(args.json, args.color, args.no_animation, &config);

        for warning in &warnings {
            eprint!("{}", render_config_warning(warning, ui.color, ui.unicode));
        }

        Ok(Self { cwd, config, ui })
    }

    /// Invoker for the configured tool plus the tracker of its outcomes
    pub fn invoker(&self) -> (SyncInvoker<ProcessTool>, Arc<OutcomeTracker>) {
        let reporter: Arc<dyn InvocationSink> = if self.ui.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleSink::new(self.ui))
        };
        let tracker = Arc::new(OutcomeTracker::new(reporter));

        let tool = ProcessTool::from_command_line(&self.config.tool.command).in_dir(&self.cwd);
        let options = InvokerOptions::new(&self.cwd).with_extension(&self.config.tool.extension);
        let invoker = SyncInvoker::new(tool, Arc::clone(&tracker) as Arc<dyn InvocationSink>, options);
        (invoker, tracker)
    }
}

/// Forwards events and remembers whether any invocation failed
pub struct OutcomeTracker {
    inner: Arc<dyn InvocationSink>,
    failed: AtomicBool,
}

impl OutcomeTracker {
    pub fn new(inner: Arc<dyn InvocationSink>) -> Self {
        Self {
            inner,
            failed: AtomicBool::new(false),
        }
    }

    pub fn any_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl InvocationSink for OutcomeTracker {
    fn started(&self, operation: &Operation) -> ProgressHandle {
        self.inner.started(operation)
    }

    fn finished(&self, event: InvocationEvent) {
        if !event.is_success() {
            self.failed.store(true, Ordering::SeqCst);
        }
        self.inner.finished(event);
    }
}

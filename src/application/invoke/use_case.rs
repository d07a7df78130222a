//! Sync Invoker implementation
//!
//! Runs one external tool invocation at a time. A trigger that arrives while
//! an invocation is in flight is dropped. The run happens on a worker
//! thread so the watch loop keeps observing changes meanwhile.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::domain::diagnostics::{parse_failure_diagnostics, parse_success_output, SyntaxErrorScan};
use crate::domain::excerpt::SourceExcerptWindow;
use crate::domain::operation::{Direction, Operation};
use crate::domain::ports::{InvocationEvent, InvocationSink, SuccessReport, SyncTool, ToolOutput};
use crate::domain::run_state::RunState;
use crate::error::ShellResult;

use super::options::InvokerOptions;

/// Single-flight wrapper around the external sync tool
pub struct SyncInvoker<T: SyncTool> {
    tool: Arc<T>,
    sink: Arc<dyn InvocationSink>,
    options: Arc<InvokerOptions>,
    run_state: RunState,
}

impl<T: SyncTool + 'static> SyncInvoker<T> {
    pub fn new(tool: T, sink: Arc<dyn InvocationSink>, options: InvokerOptions) -> Self {
        Self {
            tool: Arc::new(tool),
            sink,
            options: Arc::new(options),
            run_state: RunState::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.run_state.is_busy()
    }

    /// Shared handle on the busy flag
    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    /// Push or pull. Returns `None` when dropped because another
    /// invocation is in flight.
    pub fn trigger(&self, direction: Direction) -> Option<JoinHandle<()>> {
        self.launch(Operation::Sync { direction })
    }

    /// Forward `args` to the tool verbatim, same single-flight rules
    pub fn run_passthrough(&self, args: Vec<String>) -> Option<JoinHandle<()>> {
        self.launch(Operation::passthrough(args))
    }

    fn launch(&self, operation: Operation) -> Option<JoinHandle<()>> {
        let Some(guard) = self.run_state.try_acquire() else {
            tracing::debug!(%operation, "invocation in flight, trigger dropped");
            return None;
        };

        let tool = Arc::clone(&self.tool);
        let sink = Arc::clone(&self.sink);
        let options = Arc::clone(&self.options);

        Some(thread::spawn(move || {
            // released after the result is reported, or while unwinding
            let _guard = guard;
            execute(tool.as_ref(), sink.as_ref(), &options, &operation);
        }))
    }
}

/// Run one operation to completion and report it (blocking)
pub fn execute(
    tool: &dyn SyncTool,
    sink: &dyn InvocationSink,
    options: &InvokerOptions,
    operation: &Operation,
) {
    let progress = sink.started(operation);
    let args = operation.args();
    tracing::debug!(program = tool.program(), ?args, "running external tool");
    let result = tool.run(&args);
    progress.stop();

    sink.finished(interpret(operation, result, options));
}

/// Turn the raw tool result into the event to report
pub fn interpret(
    operation: &Operation,
    result: ShellResult<ToolOutput>,
    options: &InvokerOptions,
) -> InvocationEvent {
    let output = match result {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(error = %err, "external tool could not be started");
            return InvocationEvent::Failed {
                operation: operation.clone(),
                diagnostics: err.to_string(),
                detail: None,
            };
        }
    };

    if output.success {
        let report = match operation {
            Operation::Sync { .. } => SuccessReport::Sync(parse_success_output(&output.stdout)),
            Operation::Passthrough { .. } => SuccessReport::Passthrough {
                stdout: output.stdout,
            },
        };
        return InvocationEvent::Succeeded {
            operation: operation.clone(),
            report,
        };
    }

    if let Operation::Passthrough { .. } = operation {
        return InvocationEvent::Failed {
            operation: operation.clone(),
            diagnostics: output.diagnostics().to_string(),
            detail: None,
        };
    }

    let report = parse_failure_diagnostics(output.diagnostics());
    match report.syntax {
        SyntaxErrorScan::Absent => InvocationEvent::Failed {
            operation: operation.clone(),
            diagnostics: report.raw_diagnostics,
            detail: None,
        },
        SyntaxErrorScan::Malformed { line, error } => {
            tracing::debug!(%error, "syntax error report could not be located");
            InvocationEvent::Failed {
                operation: operation.clone(),
                diagnostics: line,
                detail: Some(error.to_string()),
            }
        }
        SyntaxErrorScan::Located(locator) => {
            let path = options.local_path(&locator);
            match SourceExcerptWindow::load(&path, locator.line_number) {
                Ok(excerpt) => InvocationEvent::SyntaxError {
                    operation: operation.clone(),
                    locator,
                    excerpt,
                },
                Err(err) => {
                    tracing::debug!(error = %err, "excerpt unavailable");
                    InvocationEvent::Failed {
                        operation: operation.clone(),
                        diagnostics: report.raw_diagnostics,
                        detail: Some(err.to_string()),
                    }
                }
            }
        }
    }
}

//! JSON Event Sink
//!
//! Outputs invocation events as NDJSON for editor integrations and scripts.

use crate::domain::operation::Operation;
use crate::domain::ports::{InvocationEvent, InvocationSink, ProgressHandle};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl InvocationSink for JsonEventSink {
    fn started(&self, operation: &Operation) -> ProgressHandle {
        self.write_event(serde_json::json!({
            "event": "invocation_started",
            "operation": operation,
        }));
        ProgressHandle::noop()
    }

    fn finished(&self, event: InvocationEvent) {
        let value = serde_json::to_value(&event)
            .unwrap_or_else(|e| serde_json::json!({"event": "error", "message": e.to_string()}));
        self.write_event(value);
    }
}

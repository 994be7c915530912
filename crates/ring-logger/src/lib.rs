//! Ring Logger
//!
//! A `tracing` layer that formats every event into a single line, mirrors it
//! to the browser console (stderr off-wasm) and keeps the most recent lines
//! in a fixed-size circular buffer so the UI can show them.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Buffer installed by [`init`]
static GLOBAL: OnceLock<LogBuffer> = OnceLock::new();

/// One formatted log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    /// Local wall-clock time, `HH:MM:SS.mmm`
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    /// Event message followed by ` key=value` pairs
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Bounded FIFO of log lines; clones share the same storage
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: LogLine) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest-first copy of the buffered lines
    pub fn lines(&self) -> Vec<LogLine> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock cannot leave the deque inconsistent
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Layer feeding a [`LogBuffer`]
pub struct RingLayer {
    buffer: LogBuffer,
    console: bool,
}

impl RingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, console: true }
    }

    /// Buffer only; nothing is written to the console
    pub fn without_console(mut self) -> Self {
        self.console = false;
        self
    }
}

impl<S: Subscriber> Layer<S> for RingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.finish(),
        };
        if self.console {
            emit(&line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            self.message + &self.fields
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    use web_sys::console;

    let text = wasm_bindgen::JsValue::from_str(&line.to_string());
    match line.level {
        Level::ERROR => console::error_1(&text),
        Level::WARN => console::warn_1(&text),
        Level::INFO => console::info_1(&text),
        _ => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line);
}

/// Install the global subscriber and return its buffer.
///
/// Calling this more than once keeps the first subscriber and returns the
/// buffer installed with it.
pub fn init(capacity: usize, max_level: Level) -> LogBuffer {
    let buffer = GLOBAL.get_or_init(|| LogBuffer::new(capacity)).clone();
    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(max_level))
        .with(RingLayer::new(buffer.clone()))
        .try_init();
    if installed.is_err() {
        tracing::debug!("ring logger already installed");
    }
    buffer
}

/// Lines captured by the buffer installed with [`init`]; empty before that
pub fn recent() -> Vec<LogLine> {
    GLOBAL.get().map(LogBuffer::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::registry;

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: "00:00:00.000".to_string(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push(line("a"));
        buffer.push(line("b"));
        buffer.push(line("c"));

        let messages: Vec<_> = buffer.lines().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, ["b", "c"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_still_keeps_one() {
        let buffer = LogBuffer::new(0);
        buffer.push(line("a"));
        buffer.push(line("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines()[0].message, "b");
    }

    #[test]
    fn test_layer_formats_message_and_fields() {
        let buffer = LogBuffer::new(8);
        let subscriber = registry().with(RingLayer::new(buffer.clone()).without_console());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(list = "work", count = 3, "todo added");
            tracing::info!(section = "links");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].level, Level::WARN);
        assert_eq!(lines[0].message, "todo added list=work count=3");
        assert_eq!(lines[1].message, "section=links");
        assert!(lines[0].to_string().contains(" WARN "));
    }

    #[test]
    fn test_clear() {
        let buffer = LogBuffer::new(4);
        buffer.push(line("a"));
        buffer.clear();
        assert!(buffer.is_empty());
    }
}

//! Output sinks.
//!
//! The logger writes exactly one line per record through a [`LogSink`].
//! Transport beyond the process (shipping, rotation, fan-out) is not this
//! crate's concern; hosts that own the stream inject their own sink.

use std::io::Write;

use parking_lot::Mutex;

/// Destination for rendered records.
///
/// One call per record. Implementations must not interleave partial lines
/// when called from concurrent workers.
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Default sink: stdout, one locked `writeln!` per record.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // A single write per record keeps concurrent lines whole.
        let _ = writeln!(handle, "{}", line);
    }
}

/// In-memory capture for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

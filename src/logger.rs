//! Per-service logger: configuration, lifecycle, and the emit path.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{in_test_env, OutputMode, SetupOptions};
use crate::event::EventContext;
use crate::format;
use crate::level::Level;
use crate::record::{CorrelationId, ExtraData, LogRecord};
use crate::sink::{ConsoleSink, LogSink};

/// Fields reachable through the administrative mutators. Mutation is rare;
/// each emit takes a brief read lock to snapshot them.
#[derive(Debug)]
struct Shared {
    service_name: String,
    column_width: usize,
    mute_in_test: bool,
}

/// One logger per service, created at startup and shared across workers.
///
/// Emission is synchronous and best-effort: each terminal call renders and
/// writes within the calling thread, and nothing on that path can fail the
/// caller's control flow. The logger holds no external resources, so there
/// is no teardown step.
pub struct Logger {
    shared: RwLock<Shared>,
    mode: OutputMode,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    /// Logger with default options: JSON output, column width 20.
    pub fn new(service: impl Into<String>) -> Self {
        Logger::with_options(service, SetupOptions::default())
    }

    pub fn with_options(service: impl Into<String>, options: SetupOptions) -> Self {
        Logger::with_sink(service, options, Arc::new(ConsoleSink))
    }

    /// Inject a custom sink. Used by tests and by hosts that own the
    /// output stream.
    pub fn with_sink(
        service: impl Into<String>,
        options: SetupOptions,
        sink: Arc<dyn LogSink>,
    ) -> Self {
        Logger {
            shared: RwLock::new(Shared {
                service_name: service.into(),
                column_width: options.column_width,
                mute_in_test: options.mute_in_test,
            }),
            mode: options.output_mode,
            sink,
        }
    }

    /// Adjust the plain-mode service column width.
    pub fn set_pad_size(&self, width: usize) {
        self.shared.write().column_width = width;
    }

    pub fn set_service_name(&self, name: impl Into<String>) {
        self.shared.write().service_name = name.into();
    }

    /// Suppress emission while the test environment marker is set.
    pub fn mute_in_test(&self) {
        self.shared.write().mute_in_test = true;
    }

    pub fn service_name(&self) -> String {
        self.shared.read().service_name.clone()
    }

    /// Output mode is fixed at construction, not switchable per call.
    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    /// Fresh single-use context at info level, no correlation id or
    /// metadata attached.
    pub fn info(&self) -> EventContext<'_> {
        EventContext::new(self, Level::Info)
    }

    pub fn debug(&self) -> EventContext<'_> {
        EventContext::new(self, Level::Debug)
    }

    pub fn warn(&self) -> EventContext<'_> {
        EventContext::new(self, Level::Warn)
    }

    pub fn error(&self) -> EventContext<'_> {
        EventContext::new(self, Level::Error)
    }

    /// Open a context carrying a correlation id; the level defaults to
    /// info until a selector re-binds it.
    pub fn context(&self, id: impl Into<CorrelationId>) -> EventContext<'_> {
        EventContext::with_context(self, id.into(), None)
    }

    /// Context with an initial metadata mapping.
    pub fn context_with(
        &self,
        id: impl Into<CorrelationId>,
        extra: ExtraData,
    ) -> EventContext<'_> {
        EventContext::with_context(self, id.into(), Some(extra))
    }

    /// Render and write one record.
    ///
    /// Best effort: a serialization failure goes to stderr and the record
    /// is dropped. The caller never sees an error.
    pub(crate) fn submit(&self, record: LogRecord) {
        let (service, column_width, muted) = {
            let shared = self.shared.read();
            (
                shared.service_name.clone(),
                shared.column_width,
                shared.mute_in_test,
            )
        };

        if muted && in_test_env() {
            return;
        }

        let line = match self.mode {
            OutputMode::Plain => format::plain::render(&record, &service, column_width),
            OutputMode::Json => match format::json::render(&record, &service) {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("svclog: {}", err);
                    return;
                }
            },
        };

        self.sink.write_line(&line);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.read();
        f.debug_struct("Logger")
            .field("service_name", &shared.service_name)
            .field("column_width", &shared.column_width)
            .field("mute_in_test", &shared.mute_in_test)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn json_logger(service: &str, sink: Arc<MemorySink>) -> Logger {
        Logger::with_sink(service, SetupOptions::default(), sink)
    }

    #[test]
    fn test_mutators_affect_live_instance() {
        let sink = Arc::new(MemorySink::new());
        let logger = json_logger("old-name", sink.clone());

        logger.set_service_name("billing");
        logger.set_pad_size(12);
        assert_eq!(logger.service_name(), "billing");

        logger.info().msg("renamed");
        let value: serde_json::Value =
            serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(value["service"], "billing");
    }

    #[test]
    fn test_output_mode_fixed_at_construction() {
        let logger = Logger::with_options(
            "gateway",
            SetupOptions {
                output_mode: OutputMode::Plain,
                ..SetupOptions::default()
            },
        );
        assert_eq!(logger.output_mode(), OutputMode::Plain);
    }

    #[test]
    fn test_default_mode_is_json() {
        let sink = Arc::new(MemorySink::new());
        let logger = json_logger("auth", sink.clone());

        logger.error().msg("boom");
        assert!(serde_json::from_str::<serde_json::Value>(&sink.lines()[0]).is_ok());
    }
}

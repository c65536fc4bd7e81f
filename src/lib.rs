//! Per-service structured logging.
//!
//! One [`Logger`] per service renders leveled, contextual records either as
//! colorized, column-aligned lines for terminals or as one JSON object per
//! record for log collectors. Call sites attach a correlation id and
//! key/value metadata through a chainable event context before the terminal
//! `msg`/`msgf` call.
//!
//! ```no_run
//! use svclog::{Logger, OutputMode, SetupOptions};
//!
//! let log = Logger::with_options(
//!     "billing",
//!     SetupOptions {
//!         output_mode: OutputMode::Plain,
//!         ..SetupOptions::default()
//!     },
//! );
//!
//! log.info().msg("service started");
//! log.context("req-42")
//!     .extra("amount", "10")
//!     .error()
//!     .msgf(format_args!("declined: {}", "insufficient funds"));
//! ```
//!
//! Logging is best effort by design: nothing on the emit path propagates a
//! failure into the caller's business logic.

pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;
pub mod style;

pub use config::{OutputMode, SetupOptions};
pub use event::EventContext;
pub use format::json::StructuredRecord;
pub use level::{Level, Theme};
pub use logger::Logger;
pub use record::{CorrelationId, ExtraData, LogRecord};
pub use sink::{ConsoleSink, LogSink, MemorySink};

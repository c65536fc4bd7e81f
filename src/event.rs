//! Chainable event contexts.
//!
//! A context carries a correlation id and metadata through a short chain of
//! level selections before exactly one terminal emit. Every chain step takes
//! the context by value and returns the next one, so a consumed context
//! cannot be reused; branching a context into several statements means
//! cloning the pieces at the call site, never aliasing shared state.

use std::fmt;

use serde_json::Value;

use crate::format;
use crate::level::Level;
use crate::logger::Logger;
use crate::record::{CorrelationId, ExtraData, LogRecord};

/// Single-shot builder for one log statement.
#[derive(Debug)]
pub struct EventContext<'a> {
    logger: &'a Logger,
    level: Level,
    correlation_id: Option<CorrelationId>,
    extra: Option<ExtraData>,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(logger: &'a Logger, level: Level) -> Self {
        EventContext {
            logger,
            level,
            correlation_id: None,
            extra: None,
        }
    }

    pub(crate) fn with_context(
        logger: &'a Logger,
        id: CorrelationId,
        extra: Option<ExtraData>,
    ) -> Self {
        EventContext {
            logger,
            level: Level::Info,
            correlation_id: Some(id),
            extra,
        }
    }

    fn at(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Re-bind to info, keeping the correlation id and metadata.
    pub fn info(self) -> Self {
        self.at(Level::Info)
    }

    pub fn debug(self) -> Self {
        self.at(Level::Debug)
    }

    pub fn warn(self) -> Self {
        self.at(Level::Warn)
    }

    pub fn error(self) -> Self {
        self.at(Level::Error)
    }

    /// Merge one key/value pair into the accumulated metadata. Later
    /// writes to the same key win.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra
            .get_or_insert_with(ExtraData::new)
            .insert(key.into(), value.into());
        self
    }

    /// Merge a whole mapping into the accumulated metadata.
    pub fn extras(mut self, data: ExtraData) -> Self {
        self.extra.get_or_insert_with(ExtraData::new).extend(data);
        self
    }

    /// Emit one record with the given message. Consumes the context.
    pub fn msg(self, message: impl AsRef<str>) {
        self.emit(message.as_ref());
    }

    /// Emit one record with a formatted message:
    /// `ctx.msgf(format_args!("declined: {}", reason))`.
    pub fn msgf(self, args: fmt::Arguments<'_>) {
        self.emit(&args.to_string());
    }

    fn emit(self, message: &str) {
        self.logger.submit(LogRecord {
            message: format::normalize(message),
            level: self.level,
            correlation_id: self.correlation_id,
            // An empty mapping carries no information; treat it as absent.
            extra: self.extra.filter(|e| !e.is_empty()),
        });
    }
}

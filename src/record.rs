//! Resolved log records and the caller-supplied values they carry.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::level::Level;

/// Caller-supplied opaque value linking related log lines (a request id,
/// a job id, an entity id). Stringified at render time only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(String);

impl CorrelationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CorrelationId {
    fn from(value: &str) -> Self {
        CorrelationId(value.to_string())
    }
}

impl From<String> for CorrelationId {
    fn from(value: String) -> Self {
        CorrelationId(value)
    }
}

impl From<u64> for CorrelationId {
    fn from(value: u64) -> Self {
        CorrelationId(value.to_string())
    }
}

impl From<i64> for CorrelationId {
    fn from(value: i64) -> Self {
        CorrelationId(value.to_string())
    }
}

/// Key/value metadata attached to one record. BTreeMap keeps plain-mode
/// rendering deterministic.
pub type ExtraData = BTreeMap<String, Value>;

/// Fully-resolved input to the render pipeline. Built immediately before
/// rendering, discarded after; owned exclusively by the emitting call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// Already normalized (first character upper-cased).
    pub message: String,
    pub level: Level,
    pub correlation_id: Option<CorrelationId>,
    pub extra: Option<ExtraData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_id_conversions() {
        assert_eq!(CorrelationId::from("req-42").as_str(), "req-42");
        assert_eq!(CorrelationId::from(42u64).to_string(), "42");
        assert_eq!(
            CorrelationId::from(String::from("job-7")),
            CorrelationId::from("job-7")
        );
    }
}

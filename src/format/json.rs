//! Structured rendering: one JSON object per record, no color codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::record::{ExtraData, LogRecord};

/// Wire format consumed by downstream log collectors.
///
/// Field names and the lowercase `level` convention are a compatibility
/// contract with external tooling; do not rename them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredRecord {
    /// Correlation id. Serialized as `null` when absent.
    pub entity_id: Option<String>,
    pub message: String,
    pub level: String,
    /// Metadata mapping, omitted entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraData>,
    pub service: String,
    /// UTC, RFC 3339.
    pub date: DateTime<Utc>,
}

impl StructuredRecord {
    fn from_record(record: &LogRecord, service: &str) -> Self {
        StructuredRecord {
            entity_id: record.correlation_id.as_ref().map(|id| id.to_string()),
            message: record.message.clone(),
            level: record.level.as_str().to_string(),
            extra: record.extra.clone(),
            service: service.to_string(),
            date: Utc::now(),
        }
    }
}

/// Render one record as a single JSON line.
pub fn render(record: &LogRecord, service: &str) -> Result<String, RenderError> {
    let structured = StructuredRecord::from_record(record, service);
    Ok(serde_json::to_string(&structured)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_absent_context_fields() {
        let rec = LogRecord {
            message: "Database gone".to_string(),
            level: Level::Error,
            correlation_id: None,
            extra: None,
        };

        let line = render(&rec, "storage").unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!(value["entity_id"].is_null());
        assert!(value.get("extra").is_none());
        assert_eq!(value["level"], "error");
        assert_eq!(value["service"], "storage");
    }

    #[test]
    fn test_round_trip() {
        let rec = LogRecord {
            message: "Payment settled".to_string(),
            level: Level::Info,
            correlation_id: Some("req-42".into()),
            extra: Some(
                [("amount".to_string(), serde_json::json!("10"))]
                    .into_iter()
                    .collect(),
            ),
        };

        let line = render(&rec, "billing").unwrap();
        let parsed: StructuredRecord = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed.entity_id.as_deref(), Some("req-42"));
        assert_eq!(parsed.message, "Payment settled");
        assert_eq!(parsed.level, "info");
        assert_eq!(parsed.service, "billing");
        assert_eq!(
            parsed.extra.unwrap().get("amount"),
            Some(&serde_json::json!("10"))
        );
    }
}

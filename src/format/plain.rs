//! Human-readable rendering: one colorized, column-aligned line per record.

use chrono::Local;
use colored::Colorize;

use crate::format::scalar;
use crate::level::Theme;
use crate::record::LogRecord;
use crate::style;

/// Render one record as a colorized line. Infallible by construction.
///
/// Layout: `<timestamp> <LEVEL> <gap>[<service>]:<pad><message>`, where the
/// message body is prefixed with `[correlation-id] ` and then with
/// `[k1=v1,k2=v2] ` when that context is present.
pub fn render(record: &LogRecord, service: &str, column_width: usize) -> String {
    let theme = Theme::for_level(record.level);
    let timestamp = Local::now().format("%d.%m.%Y %H:%M:%S").to_string();

    let mut body = record.message.clone();
    if let Some(id) = &record.correlation_id {
        body = format!("[{}] {}", id, body);
    }
    if let Some(extra) = record.extra.as_ref().filter(|e| !e.is_empty()) {
        let pairs: Vec<String> = extra
            .iter()
            .map(|(key, value)| format!("{}={}", key, scalar(value)))
            .collect();
        body = format!("[{}] {}", pairs.join(","), body);
    }

    format!(
        "{} {} {}[{}]:{}{}",
        timestamp.color(style::TIMESTAMP_COLOR),
        theme.label.color(theme.level_color),
        theme.column_gap(),
        service.color(style::service_color(service)),
        style::service_padding(service, column_width),
        body.color(theme.message_color),
    )
}

//! Record rendering: shared normalization plus the plain and JSON pipelines.

pub mod json;
pub mod plain;

use serde_json::Value;

/// Upper-case the first character of a message, leaving the rest untouched.
/// Empty input stays empty.
pub fn normalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a metadata value for the plain-mode `k=v` list. Strings render
/// bare, without JSON quoting; everything else uses its JSON form.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

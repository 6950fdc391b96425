//! Display formatting for debug arguments.
//!
//! The formatted string is lossy by design: it exists so the debug UI can
//! show something readable at a glance. The raw argument values travel in
//! the payload alongside it.

use serde_json::Value;

/// Format a list of raw arguments into a single display string.
///
/// Rules, applied per argument:
/// - strings pass through unchanged
/// - arrays and objects render as pretty-printed JSON
/// - booleans render as `true` / `false`
/// - null renders as `null`
/// - numbers use their natural representation
///
/// Parts are joined with a single space.
pub(crate) fn format_arguments(arguments: &[Value]) -> String {
    arguments
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        Value::Bool(flag) => flag.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(number) => number.to_string(),
    }
}

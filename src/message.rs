//! Wire payload sent to the debug server.

use serde::Serialize;
use serde_json::Value;

/// Display color for a message in the debug UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Gray,
}

impl Color {
    /// Lowercase name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Gray => "gray",
        }
    }
}

/// One debug message as POSTed to `/debug`.
///
/// Field names are camelCase on the wire. Optional fields serialize as
/// explicit `null` so the receiving UI sees a stable shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugMessage {
    /// Unique message identifier (UUID v4).
    pub id: String,
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    /// Formatted display text, one space-joined part per argument.
    pub message: String,
    /// Raw arguments as submitted, for the UI to re-render richly.
    pub arguments: Vec<Value>,
    /// Source file of the call site, if resolved.
    pub source_file: Option<String>,
    /// Source line of the call site, if resolved.
    pub source_line: Option<u32>,
    /// Display color tag.
    pub color: Option<Color>,
    /// Free-form level tag (e.g. `info`, `error`).
    pub level: Option<String>,
    /// Screen/channel name grouping related messages in the UI.
    pub screen: Option<String>,
    /// Client-side send timestamp, milliseconds with sub-ms precision.
    pub execution_time: f64,
}

/// Convert a serializable value into the raw-argument representation.
///
/// Conversion failure degrades to JSON null rather than propagating:
/// instrumentation must never fail the instrumented code.
pub(crate) fn to_arg<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::debug!("argument not serializable, sending null: {}", e);
        Value::Null
    })
}

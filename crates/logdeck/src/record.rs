//! Log record model and events-API deserialization.
//!
//! The remote log-events API wraps each record as
//! `{ "type": "stdout", "payload": { "text": ..., "date": ..., "info": { ... } } }`.
//! `LogRecord` deserializes that wire shape directly and flattens the payload,
//! so a fetched batch is usable without a separate mapping pass.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Record kind from the events API `type` field.
///
/// The vocabulary is open on the wire; unknown values are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordKind {
    Stdout,
    Other(String),
}

impl From<String> for RecordKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "stdout" => Self::Stdout,
            _ => Self::Other(value),
        }
    }
}

impl From<RecordKind> for String {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Stdout => "stdout".to_string(),
            RecordKind::Other(value) => value,
        }
    }
}

/// Record role from the `payload.info.type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordRole {
    Build,
    Output,
    /// Role missing from the payload.
    Unknown,
    Other(String),
}

impl Default for RecordRole {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<String> for RecordRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "build" => Self::Build,
            "output" => Self::Output,
            "" => Self::Unknown,
            _ => Self::Other(value),
        }
    }
}

impl From<RecordRole> for String {
    fn from(role: RecordRole) -> Self {
        match role {
            RecordRole::Build => "build".to_string(),
            RecordRole::Output => "output".to_string(),
            RecordRole::Unknown => String::new(),
            RecordRole::Other(value) => value,
        }
    }
}

/// Source metadata attached to a record by the deployment platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordInfo {
    #[serde(rename = "type")]
    pub role: RecordRole,
    pub entrypoint: Option<String>,
    pub path: Option<String>,
    pub name: Option<String>,
}

/// One deployment log record, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireEvent")]
pub struct LogRecord {
    pub kind: RecordKind,
    pub text: String,
    pub date: Option<DateTime<Utc>>,
    pub info: RecordInfo,
}

impl LogRecord {
    /// Construct a stdout record; the common case for tests and fixtures.
    pub fn stdout(text: impl Into<String>, date: Option<DateTime<Utc>>, info: RecordInfo) -> Self {
        Self {
            kind: RecordKind::Stdout,
            text: text.into(),
            date,
            info,
        }
    }

    pub fn is_stdout(&self) -> bool {
        self.kind == RecordKind::Stdout
    }
}

/// Wire shape of one event as returned by the log-events API.
#[derive(Deserialize)]
struct WireEvent {
    #[serde(rename = "type")]
    kind: RecordKind,
    #[serde(default)]
    payload: WirePayload,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct WirePayload {
    text: String,
    #[serde(deserialize_with = "deserialize_date")]
    date: Option<DateTime<Utc>>,
    info: RecordInfo,
}

impl From<WireEvent> for LogRecord {
    fn from(event: WireEvent) -> Self {
        Self {
            kind: event.kind,
            text: event.payload.text,
            date: event.payload.date,
            info: event.payload.info,
        }
    }
}

/// The API emits `date` as a millisecond epoch; older payloads use RFC 3339
/// strings. Anything else degrades to `None` rather than failing the batch.
fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(parse_date))
}

fn parse_date(value: serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::Number(millis) => millis
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        serde_json::Value::String(text) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        _ => None,
    }
}

/// Stdout records produced by build steps.
pub fn build_logs(records: &[LogRecord]) -> Vec<&LogRecord> {
    records
        .iter()
        .filter(|r| r.is_stdout() && r.info.role == RecordRole::Build)
        .collect()
}

/// Stdout records produced by deployed function output.
pub fn output_logs(records: &[LogRecord]) -> Vec<&LogRecord> {
    records
        .iter()
        .filter(|r| r.is_stdout() && r.info.role == RecordRole::Output)
        .collect()
}

/// Stdout records with any other role.
pub fn other_logs(records: &[LogRecord]) -> Vec<&LogRecord> {
    records
        .iter()
        .filter(|r| {
            r.is_stdout() && r.info.role != RecordRole::Build && r.info.role != RecordRole::Output
        })
        .collect()
}

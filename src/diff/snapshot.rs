use crate::graph::GraphDocument;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted flow version as the comparison endpoint delivers it: the
/// graph document (possibly re-encoded along the way) plus optional
/// compiled-artifact side data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    #[serde(default)]
    pub content_json: Value,
    #[serde(default)]
    pub snapshot_data: Value,
}

impl VersionSnapshot {
    /// The embedded graph document. A payload that stays unreadable after
    /// every repair attempt degrades to an empty graph.
    pub fn graph(&self) -> GraphDocument {
        serde_json::from_value(lenient_object(&self.content_json)).unwrap_or_default()
    }

    /// The compiled-artifact side data, decoded with the same leniency.
    pub fn artifact(&self) -> Value {
        lenient_object(&self.snapshot_data)
    }
}

/// Decodes a value that should be a JSON object but may arrive in several
/// degraded shapes.
///
/// A value already structured passes through. A string is parsed as JSON;
/// when that parse yields another string the value was double-encoded and
/// is parsed once more. A failed parse gets one repair attempt that quotes
/// bare integer object keys (some serializers emit `{1: …}` for integer
/// maps) before parsing again. Anything still unreadable becomes an empty
/// object, never an error.
pub fn lenient_object(value: &Value) -> Value {
    match value {
        Value::Null => Value::Object(serde_json::Map::new()),
        Value::String(raw) => {
            if let Some(parsed) = parse_decoded(raw) {
                return parsed;
            }
            if let Some(parsed) = repair_unquoted_keys(raw).as_deref().and_then(parse_decoded) {
                return parsed;
            }
            Value::Object(serde_json::Map::new())
        }
        other => other.clone(),
    }
}

/// One parse attempt, unwrapping a double-encoded string when the first
/// parse yields one. A literal `null` counts as unusable so the caller
/// moves on to repair.
fn parse_decoded(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Null => None,
        Value::String(inner) => match serde_json::from_str::<Value>(&inner) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(_) => Some(Value::String(inner)),
        },
        value => Some(value),
    }
}

/// Quotes bare integer object keys: `{1: …}` and `, 2: …` become valid
/// JSON keys.
fn repair_unquoted_keys(raw: &str) -> Option<String> {
    let pattern = Regex::new(r"([{,]\s*)(\d+)\s*:").ok()?;
    Some(pattern.replace_all(raw, "${1}\"${2}\":").into_owned())
}

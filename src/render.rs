//! JSON rendering for generated documents.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// How a document is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indent by four spaces; otherwise compact.
    pub pretty: bool,
    /// Order mapping keys alphabetically at every depth; otherwise document order.
    pub sort_keys: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            sort_keys: false,
        }
    }
}

/// Recursively order mapping keys.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(fields.len());
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&fields[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

pub fn to_json_string(value: &Value, options: RenderOptions) -> Result<String, serde_json::Error> {
    let sorted;
    let value = if options.sort_keys {
        sorted = sort_keys(value);
        &sorted
    } else {
        value
    };

    if !options.pretty {
        return serde_json::to_string(value);
    }

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// The document as a JSON string value holding its compact serialization, the
/// form a saved object stores it in.
pub fn embed(value: &Value) -> Result<Value, serde_json::Error> {
    Ok(Value::String(serde_json::to_string(value)?))
}

//! Raw Config Sources
//!
//! A raw config source is one human-authored mapping: either the dashboard-level
//! config or the visualization-level config. Both share the same shape: top-level
//! scalars plus named collections keyed by arbitrary entry names, where the reserved
//! `default` entry carries fallback values for the rest of its collection.
//!
//! Every lookup here returns an `Option`; absence is a normal outcome and the
//! reconciler decides whether a missing key is tolerated or left unresolved.

use crate::error::LoadError;
use serde_json::{Map, Number, Value};

/// Reserved collection entry supplying per-collection fallback values.
pub const DEFAULT_ENTRY: &str = "default";

/// One raw config source, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    fields: Map<String, Value>,
}

impl RawConfig {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a source from a JSON value. `null` is treated as an empty source.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::default()),
            other => Err(LoadError::NotAMapping(kind_of(&other).to_string())),
        }
    }

    /// Parse a YAML document. An empty document yields an empty source.
    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
        Self::from_value(yaml_to_json(yaml))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Raw lookup; present even if the value is `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A resolved scalar: present and not `null`.
    pub fn scalar(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }

    /// A named collection, if present and a mapping.
    pub fn collection(&self, key: &str) -> Option<&Map<String, Value>> {
        self.fields.get(key).and_then(Value::as_object)
    }

    /// The `default` entry of a named collection, if any.
    pub fn collection_default(&self, key: &str) -> Option<&Map<String, Value>> {
        self.collection(key)
            .and_then(|entries| entries.get(DEFAULT_ENTRY))
            .and_then(Value::as_object)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

impl From<Map<String, Value>> for RawConfig {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Convert a YAML value into JSON. Non-string mapping keys (`1:`, `true:`) are
/// stringified so that index-addressed collections survive the conversion.
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut fields = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                fields.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(fields)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_u64() {
        Value::Number(i.into())
    } else if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            // .nan / .inf have no JSON form
            .unwrap_or_else(|| Value::String(n.to_string()))
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => yaml_to_json(other).to_string(),
    }
}

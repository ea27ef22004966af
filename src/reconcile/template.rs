//! Format templates: per-collection field lists and their defaults.

use serde_json::{Map, Value};

/// Required fields of a `value_axes` entry.
pub const VALUE_AXIS_FIELDS: &[&str] = &["position", "title"];

/// Required fields of a `seriesParams` entry.
pub const SERIES_PARAM_FIELDS: &[&str] = &["value_axis", "data_type", "mode", "label", "agg_id"];

/// Required fields of an `aggs` entry.
pub const AGG_FIELDS: &[&str] = &["custom_label", "field", "schema"];

/// Starting point for every entry materialized from one collection.
///
/// Holds each required field (unresolved until a default supplies it) plus
/// whatever the collection's `default` entry declares.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatTemplate {
    fields: Map<String, Value>,
}

impl FormatTemplate {
    /// Template with every required field unresolved.
    pub fn new(required: &[&str]) -> Self {
        let fields = required
            .iter()
            .map(|name| (name.to_string(), Value::Null))
            .collect();
        Self { fields }
    }

    /// Copy every field of a `default` entry into the template.
    pub fn with_defaults(mut self, defaults: Option<&Map<String, Value>>) -> Self {
        if let Some(defaults) = defaults {
            for (name, value) in defaults {
                self.fields.insert(name.clone(), value.clone());
            }
        }
        self
    }

    /// Apply defaults then overlay: a fresh entry from the template with each
    /// `overlay` field replaced by the override's value when the override has it.
    pub fn instantiate(&self, overrides: &Map<String, Value>, overlay: &[&str]) -> Map<String, Value> {
        let mut entry = self.fields.clone();
        for name in overlay {
            if let Some(value) = overrides.get(*name) {
                entry.insert(name.to_string(), value.clone());
            }
        }
        entry
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

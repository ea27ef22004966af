//! Series notation: one `series` entry expands into a `seriesParams` entry and
//! an `aggs` entry that share the aggregation index.

use crate::intermediate::IntermediateDocument;
use crate::raw::{kind_of, RawConfig};
use crate::reconcile::{expand_collection, CollectionTemplates, VALUE_AXES};
use crate::reconcile::template::VALUE_AXIS_FIELDS;
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const SERIES: &str = "series";

/// Dashboard section that may carry a `series` collection.
pub const Y_AXIS: &str = "y-axis";

/// A series entry carrying this field (any value) gets no `seriesParams` entry.
pub const NOT_IN_SERIES_PARAMS: &str = "not_in_seriesParams";

const SERIES_PARAM_OVERLAY: &[&str] = &["value_axis", "data_type", "mode", "label"];
const AGG_OVERLAY: &[&str] = &["field", "schema"];

/// One config mapping contributing series entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeriesSource<'a> {
    pub origin: &'static str,
    pub fields: &'a Map<String, Value>,
}

/// Series sources in processing order: the viz config, then `dashboard["y-axis"]`.
///
/// A source is included only if it has a `series` key.
pub(crate) fn series_sources<'a>(dashboard: &'a RawConfig, viz: &'a RawConfig) -> Vec<SeriesSource<'a>> {
    let mut sources = Vec::new();
    if viz.contains_key(SERIES) {
        sources.push(SeriesSource {
            origin: "viz",
            fields: viz.as_map(),
        });
    }
    if let Some(y_axis) = dashboard.collection(Y_AXIS) {
        if y_axis.contains_key(SERIES) {
            sources.push(SeriesSource {
                origin: Y_AXIS,
                fields: y_axis,
            });
        }
    }
    sources
}

/// Expand one series source into the running intermediate collections.
///
/// The source's own `value_axes` are appended first. For the viz config this is a
/// second pass over axes already expanded directly, so each of them appears twice.
pub(crate) fn expand_source(
    source: SeriesSource<'_>,
    templates: &CollectionTemplates,
    doc: &mut IntermediateDocument,
) {
    if let Some(value_axes) = source.fields.get(VALUE_AXES).and_then(Value::as_object) {
        expand_collection(
            &mut doc.value_axes,
            &templates.value_axes,
            value_axes,
            VALUE_AXIS_FIELDS,
        );
    }

    let empty = Map::new();
    for (key, entry) in series_entries(source) {
        let overrides = match entry {
            Value::Object(fields) => fields,
            Value::Null => &empty,
            other => {
                warn!(
                    source = source.origin,
                    series = %key,
                    found = kind_of(other),
                    "Series entry is not a mapping; treating it as empty"
                );
                &empty
            }
        };
        expand_entry(&key, overrides, templates, doc);
    }
}

fn series_entries(source: SeriesSource<'_>) -> Vec<(String, &Value)> {
    match source.fields.get(SERIES) {
        Some(Value::Object(entries)) => entries.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn expand_entry(
    key: &str,
    overrides: &Map<String, Value>,
    templates: &CollectionTemplates,
    doc: &mut IntermediateDocument,
) {
    let agg_index = doc.aggs.next_index();

    if overrides.contains_key(NOT_IN_SERIES_PARAMS) {
        debug!(series = %key, "Series entry excluded from seriesParams");
    } else {
        let mut params = templates
            .series_params
            .instantiate(overrides, SERIES_PARAM_OVERLAY);
        params.insert("agg_id".to_string(), Value::from(agg_index));
        let index = doc.series_params.push(params);
        debug!(series = %key, index, agg_id = agg_index, "Materialized seriesParams entry");
    }

    let mut agg = templates.aggs.instantiate(overrides, AGG_OVERLAY);
    let label = match overrides.get("label") {
        Some(label) => label.clone(),
        None => {
            warn!(series = %key, "required fields are empty: series entry has no label");
            Value::Null
        }
    };
    agg.insert("custom_label".to_string(), label);
    doc.aggs.push(agg);
    debug!(series = %key, index = agg_index, "Materialized aggs entry");
}

//! Config Reconciliation
//!
//! Merges the dashboard-level and visualization-level config sources into one
//! canonical intermediate document. Order matters; later steps append to or
//! override what earlier steps produced:
//!
//! 1. Top-level scalars: viz config first, then dashboard config.
//! 2. Per-collection templates seeded from the viz config's `default` entries.
//! 3. Direct expansion of the viz config's `value_axes`, `seriesParams`, `aggs`.
//! 4. Series expansion from the viz config and from `dashboard["y-axis"]`. Each
//!    source appends its own `value_axes` before its series entries.
//! 5. Fallback axis: a document that ends up with no value axis while the viz
//!    config declares a `value_axes` default gets one axis built from it.
//! 6. Completeness check; an unresolved required field aborts reconciliation.
//!
//! Entry indices come from the running length of each collection, so they are
//! monotonic across every contributing source and never reset.

mod series;
mod template;

pub use series::{NOT_IN_SERIES_PARAMS, SERIES, Y_AXIS};
pub use template::{FormatTemplate, AGG_FIELDS, SERIES_PARAM_FIELDS, VALUE_AXIS_FIELDS};

use crate::error::GenerateError;
use crate::intermediate::{IndexedCollection, IntermediateDocument};
use crate::raw::{RawConfig, DEFAULT_ENTRY};
use crate::validate;
use serde_json::{Map, Value};
use tracing::{debug, info};

pub const VALUE_AXES: &str = "value_axes";
pub const SERIES_PARAMS: &str = "seriesParams";
pub const AGGS: &str = "aggs";

/// Top-level scalars every document must resolve.
pub const SCALAR_FIELDS: &[&str] = &["type", "index_pattern", "num_cat_axes", "title", "desc", "id"];

/// One template per collection, seeded from the viz config's `default` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionTemplates {
    pub value_axes: FormatTemplate,
    pub series_params: FormatTemplate,
    pub aggs: FormatTemplate,
}

impl CollectionTemplates {
    pub fn seed(viz: &RawConfig) -> Self {
        Self {
            value_axes: FormatTemplate::new(VALUE_AXIS_FIELDS)
                .with_defaults(viz.collection_default(VALUE_AXES)),
            series_params: FormatTemplate::new(SERIES_PARAM_FIELDS)
                .with_defaults(viz.collection_default(SERIES_PARAMS)),
            aggs: FormatTemplate::new(AGG_FIELDS).with_defaults(viz.collection_default(AGGS)),
        }
    }
}

/// Reconcile both sources into a complete intermediate document.
pub fn reconcile(dashboard: &RawConfig, viz: &RawConfig) -> Result<IntermediateDocument, GenerateError> {
    let doc = merge(dashboard, viz);

    let missing = validate::unresolved_paths(&doc.to_value()?);
    if !missing.is_empty() {
        return Err(GenerateError::IncompleteConfiguration { missing });
    }

    info!(
        value_axes = doc.value_axes.len(),
        series_params = doc.series_params.len(),
        aggs = doc.aggs.len(),
        "Reconciled intermediate document"
    );
    Ok(doc)
}

/// Merge both sources without the completeness check. Unresolved fields are
/// left as `null`.
pub fn merge(dashboard: &RawConfig, viz: &RawConfig) -> IntermediateDocument {
    let mut doc = resolve_scalars(dashboard, viz);
    let templates = CollectionTemplates::seed(viz);

    if let Some(entries) = viz.collection(VALUE_AXES) {
        expand_collection(&mut doc.value_axes, &templates.value_axes, entries, VALUE_AXIS_FIELDS);
    }
    if let Some(entries) = viz.collection(SERIES_PARAMS) {
        expand_collection(
            &mut doc.series_params,
            &templates.series_params,
            entries,
            SERIES_PARAM_FIELDS,
        );
    }
    if let Some(entries) = viz.collection(AGGS) {
        expand_collection(&mut doc.aggs, &templates.aggs, entries, AGG_FIELDS);
    }

    for source in series::series_sources(dashboard, viz) {
        debug!(source = source.origin, "Expanding series");
        series::expand_source(source, &templates, &mut doc);
    }

    if doc.value_axes.is_empty() && viz.collection_default(VALUE_AXES).is_some() {
        doc.value_axes
            .push(templates.value_axes.instantiate(&Map::new(), VALUE_AXIS_FIELDS));
        debug!("Materialized fallback value axis from defaults");
    }

    doc
}

fn resolve_scalars(dashboard: &RawConfig, viz: &RawConfig) -> IntermediateDocument {
    let pick = |name: &str| {
        viz.scalar(name)
            .or_else(|| dashboard.scalar(name))
            .cloned()
            .unwrap_or(Value::Null)
    };

    IntermediateDocument {
        chart_type: pick("type"),
        index_pattern: pick("index_pattern"),
        num_cat_axes: pick("num_cat_axes"),
        title: pick("title"),
        desc: pick("desc"),
        id: pick("id"),
        ..IntermediateDocument::default()
    }
}

/// Materialize every non-`default` entry of a raw collection, in document order.
pub(crate) fn expand_collection(
    target: &mut IndexedCollection,
    template: &FormatTemplate,
    entries: &Map<String, Value>,
    fields: &[&str],
) {
    let empty = Map::new();
    for (key, entry) in entries {
        if key == DEFAULT_ENTRY {
            continue;
        }
        let overrides = entry.as_object().unwrap_or(&empty);
        let index = target.push(template.instantiate(overrides, fields));
        debug!(entry = %key, index, "Materialized collection entry");
    }
}

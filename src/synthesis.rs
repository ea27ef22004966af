//! Document Synthesis
//!
//! Expands a reconciled intermediate document into the output visualization
//! state. Synthesis is a pure function of its input. Each element kind has its own
//! builder with its own counter starting at 1, so synthetic ids
//! (`CategoryAxis-N`, `ValueAxis-N`, aggregation `"N"`) follow materialization
//! order. The intermediate document's index keys only decide iteration order.

mod aggregation;
mod axes;
mod series_params;

pub use aggregation::{AggSchema, AggregationBuilder, TERMS_SIZE};
pub use axes::{AxisSide, CategoryAxisBuilder, ValueAxisBuilder};
pub use series_params::series_param;

use crate::error::GenerateError;
use crate::intermediate::IntermediateDocument;
use crate::raw::kind_of;
use crate::vis_state::{VisParams, VisState};
use serde_json::{Map, Value};
use tracing::debug;

/// Build the output document from a reconciled intermediate document.
pub fn synthesize(doc: &IntermediateDocument) -> Result<VisState, GenerateError> {
    let num_cat_axes = category_axis_count(&doc.num_cat_axes)?;

    let mut params = VisParams::skeleton(doc.chart_type.clone());

    let mut categories = CategoryAxisBuilder::new();
    params.category_axes = (0..num_cat_axes).map(|_| categories.create()).collect();

    let mut value_axes = ValueAxisBuilder::new();
    params.value_axes = doc
        .value_axes
        .entries()
        .iter()
        .map(|entry| value_axes.create(field(entry, "position"), field(entry, "title")))
        .collect();

    let mut aggregations = AggregationBuilder::new();
    let aggs = doc
        .aggs
        .entries()
        .iter()
        .map(|entry| {
            aggregations.create(
                field(entry, "field"),
                field(entry, "custom_label"),
                field(entry, "schema"),
            )
        })
        .collect();

    params.series_params = doc.series_params.entries().iter().map(series_param).collect();

    debug!(
        category_axes = params.category_axes.len(),
        value_axes = params.value_axes.len(),
        series_params = params.series_params.len(),
        "Synthesized visualization state"
    );

    Ok(VisState {
        title: doc.title.clone(),
        chart_type: doc.chart_type.clone(),
        params,
        aggs,
    })
}

/// Upper bound on `num_cat_axes`; every category axis is materialized.
pub const MAX_CATEGORY_AXES: u64 = 64;

fn category_axis_count(value: &Value) -> Result<u64, GenerateError> {
    let count = value.as_u64().ok_or_else(|| GenerateError::InvalidField {
        field: "num_cat_axes".to_string(),
        reason: format!("expected a non-negative integer, found {}", kind_of(value)),
    })?;
    if count > MAX_CATEGORY_AXES {
        return Err(GenerateError::InvalidField {
            field: "num_cat_axes".to_string(),
            reason: format!("{} exceeds the maximum of {}", count, MAX_CATEGORY_AXES),
        });
    }
    Ok(count)
}

static NULL: Value = Value::Null;

fn field<'a>(entry: &'a Map<String, Value>, name: &str) -> &'a Value {
    entry.get(name).unwrap_or(&NULL)
}

/// Render a scalar the way it appears inside a synthetic reference: strings
/// without quotes, numbers and booleans in their JSON form.
pub(crate) fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! Series rendering parameters.

use crate::synthesis::display_scalar;
use crate::vis_state::{SeriesData, SeriesParam};
use serde_json::Map;
use serde_json::Value;

/// Build one series params entry from an intermediate `seriesParams` entry.
///
/// The value axis is referenced as `ValueAxis-<value_axis>` and the aggregation
/// by the string form of `agg_id`.
pub fn series_param(entry: &Map<String, Value>) -> SeriesParam {
    let field = |name: &str| entry.get(name).cloned().unwrap_or(Value::Null);

    SeriesParam {
        show: true,
        series_type: field("data_type"),
        mode: field("mode"),
        data: SeriesData {
            label: field("label"),
            id: display_scalar(&field("agg_id")),
        },
        value_axis: format!("ValueAxis-{}", display_scalar(&field("value_axis"))),
        draw_lines_between_points: true,
        show_circles: true,
    }
}

//! Output document: the chart's visualization state.
//!
//! Field names and nesting mirror the downstream UI's chart-configuration schema
//! and must not change.

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisState {
    pub title: Value,
    #[serde(rename = "type")]
    pub chart_type: Value,
    pub params: VisParams,
    pub aggs: Vec<Aggregation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisParams {
    #[serde(rename = "type")]
    pub chart_type: Value,
    pub grid: Grid,
    pub category_axes: Vec<CategoryAxis>,
    pub value_axes: Vec<ValueAxis>,
    pub series_params: Vec<SeriesParam>,
    pub add_tooltip: bool,
    pub add_legend: bool,
    pub legend_position: String,
    pub times: Vec<Value>,
    pub add_time_marker: bool,
}

impl VisParams {
    /// Params skeleton with the fixed rendering settings and no axes or series.
    pub fn skeleton(chart_type: Value) -> Self {
        Self {
            chart_type,
            grid: Grid::default(),
            category_axes: Vec::new(),
            value_axes: Vec::new(),
            series_params: Vec::new(),
            add_tooltip: true,
            add_legend: true,
            legend_position: "right".to_string(),
            times: Vec::new(),
            add_time_marker: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub category_lines: bool,
    pub style: GridStyle,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            category_lines: false,
            style: GridStyle {
                color: "#eee".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub id: String,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub position: String,
    pub show: bool,
    pub style: Map<String, Value>,
    pub scale: AxisScale,
    pub labels: AxisLabels,
    pub title: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub position: String,
    pub show: bool,
    pub style: Map<String, Value>,
    pub scale: AxisScale,
    pub labels: AxisLabels,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisScale {
    #[serde(rename = "type")]
    pub scale_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    pub truncate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesParam {
    pub show: bool,
    #[serde(rename = "type")]
    pub series_type: Value,
    pub mode: Value,
    pub data: SeriesData,
    pub value_axis: String,
    pub draw_lines_between_points: bool,
    pub show_circles: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub label: Value,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregation {
    pub id: String,
    pub enabled: bool,
    /// `None` when the schema is not one the synthesizer knows; serialized as
    /// `null` so the output completeness check rejects it.
    #[serde(rename = "type")]
    pub agg_type: Option<String>,
    pub schema: Value,
    pub params: AggregationParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationParams {
    pub field: Value,
    pub custom_label: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl VisState {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

//! Integration tests for the reconcile/synthesize pipeline

use crate::integration::test_utils::{raw, viz_with};
use serde_json::{json, Value};
use visgen::reconcile::SCALAR_FIELDS;
use visgen::{generate, is_complete, GenerateError, RawConfig};

fn vis_state(dashboard: &RawConfig, viz: &RawConfig) -> Value {
    generate(dashboard, viz).unwrap().vis_state.to_value().unwrap()
}

#[test]
fn test_concrete_scenario_full_document() {
    let viz = raw(json!({
        "title": "T",
        "type": "histogram",
        "index_pattern": "p",
        "num_cat_axes": 1,
        "desc": "d",
        "id": "1",
        "value_axes": {"default": {"position": "left", "title": "Count"}},
        "aggs": {
            "default": {"schema": "metric"},
            "a1": {"field": "f1", "custom_label": "L1"}
        },
        "seriesParams": {
            "s1": {"data_type": "histogram", "mode": "normal", "label": "L1", "agg_id": 1, "value_axis": 1}
        }
    }));

    let generated = generate(&raw(json!({})), &viz).unwrap();

    assert_eq!(
        generated.intermediate.to_value().unwrap(),
        json!({
            "type": "histogram",
            "value_axes": {"1": {"position": "left", "title": "Count"}},
            "seriesParams": {
                "1": {"value_axis": 1, "data_type": "histogram", "mode": "normal", "label": "L1", "agg_id": 1}
            },
            "index_pattern": "p",
            "desc": "d",
            "id": "1",
            "aggs": {"1": {"custom_label": "L1", "field": "f1", "schema": "metric"}},
            "title": "T",
            "num_cat_axes": 1
        })
    );

    assert_eq!(
        generated.vis_state.to_value().unwrap(),
        json!({
            "title": "T",
            "type": "histogram",
            "params": {
                "type": "histogram",
                "grid": {"categoryLines": false, "style": {"color": "#eee"}},
                "categoryAxes": [{
                    "id": "CategoryAxis-1",
                    "type": "category",
                    "position": "bottom",
                    "show": true,
                    "style": {},
                    "scale": {"type": "linear"},
                    "labels": {"show": true, "truncate": 100},
                    "title": {}
                }],
                "valueAxes": [{
                    "id": "ValueAxis-1",
                    "name": "LeftAxis-1",
                    "type": "value",
                    "position": "left",
                    "show": true,
                    "style": {},
                    "scale": {"type": "linear", "mode": "normal"},
                    "labels": {"show": true, "rotate": 0, "filter": false, "truncate": 100},
                    "title": {"text": "Count"}
                }],
                "seriesParams": [{
                    "show": true,
                    "type": "histogram",
                    "mode": "normal",
                    "data": {"label": "L1", "id": "1"},
                    "valueAxis": "ValueAxis-1",
                    "drawLinesBetweenPoints": true,
                    "showCircles": true
                }],
                "addTooltip": true,
                "addLegend": true,
                "legendPosition": "right",
                "times": [],
                "addTimeMarker": false
            },
            "aggs": [{
                "id": "1",
                "enabled": true,
                "type": "max",
                "schema": "metric",
                "params": {"field": "f1", "customLabel": "L1"}
            }]
        })
    );
}

#[test]
fn test_round_trip_completeness() {
    let viz = viz_with(json!({
        "value_axes": {"default": {"position": "left", "title": "V"}, "a": {}, "b": {"position": "right"}},
        "seriesParams": {"default": {"data_type": "line", "mode": "normal", "value_axis": 1}},
        "aggs": {"default": {"schema": "metric"}},
        "series": {
            "s1": {"label": "One", "field": "one"},
            "s2": {"label": "Two", "field": "two", "value_axis": 2},
            "split": {"label": "Run", "field": "run", "schema": "segment", "not_in_seriesParams": null}
        }
    }));
    let generated = generate(&raw(json!({})), &viz).unwrap();
    assert!(is_complete(&generated.intermediate.to_value().unwrap()));
    assert!(is_complete(&generated.vis_state.to_value().unwrap()));
}

#[test]
fn test_value_axis_ids_are_sequential() {
    let viz = viz_with(json!({
        "value_axes": {
            "x": {"position": "left", "title": "A"},
            "y": {"position": "right", "title": "B"},
            "z": {"title": "C", "position": "center"}
        }
    }));
    let state = vis_state(&raw(json!({})), &viz);
    let axes = state["params"]["valueAxes"].as_array().unwrap();
    let ids: Vec<&str> = axes.iter().map(|a| a["id"].as_str().unwrap()).collect();
    let names: Vec<&str> = axes.iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ValueAxis-1", "ValueAxis-2", "ValueAxis-3"]);
    assert_eq!(names, vec!["LeftAxis-1", "RightAxis-2", "LeftAxis-3"]);
}

#[test]
fn test_metric_series_label_overrides_custom_label() {
    let viz = viz_with(json!({
        "aggs": {"default": {"custom_label": "Default label"}},
        "series": {
            "avg": {"schema": "metric", "field": "throughput", "label": "Avg",
                    "custom_label": "Something else",
                    "value_axis": 1, "data_type": "line", "mode": "normal"}
        }
    }));
    let state = vis_state(&raw(json!({})), &viz);
    let agg = &state["aggs"][0];
    assert_eq!(agg["type"], json!("max"));
    assert_eq!(agg["params"]["customLabel"], json!("Avg"));
    assert_eq!(agg["params"]["field"], json!("throughput"));
}

#[test]
fn test_segment_series_is_terms() {
    let viz = viz_with(json!({
        "series": {
            "run": {"schema": "segment", "field": "test-run", "label": "Run", "not_in_seriesParams": true}
        }
    }));
    let state = vis_state(&raw(json!({})), &viz);
    let agg = &state["aggs"][0];
    assert_eq!(agg["type"], json!("terms"));
    assert_eq!(agg["params"]["size"], json!(20));
    assert_eq!(agg["params"]["order"], json!("asc"));
    assert_eq!(agg["params"]["orderBy"], json!("_term"));
    assert_eq!(state["params"]["seriesParams"], json!([]));
}

#[test]
fn test_agg_default_schema_inherited_and_overridden() {
    let viz = viz_with(json!({
        "aggs": {
            "default": {"schema": "metric"},
            "inherits": {"field": "a", "custom_label": "A"},
            "overrides": {"field": "b", "custom_label": "B", "schema": "segment"}
        }
    }));
    let generated = generate(&raw(json!({})), &viz).unwrap();
    let aggs = &generated.intermediate.aggs;
    assert_eq!(aggs.get("1").unwrap()["schema"], json!("metric"));
    assert_eq!(aggs.get("2").unwrap()["schema"], json!("segment"));
    assert_eq!(generated.vis_state.aggs[0].agg_type.as_deref(), Some("max"));
    assert_eq!(generated.vis_state.aggs[1].agg_type.as_deref(), Some("terms"));
}

#[test]
fn test_dashboard_supplies_scalars_and_y_axis_series() {
    let viz = raw(json!({
        "type": "line",
        "index_pattern": "p",
        "num_cat_axes": 2,
        "value_axes": {"default": {"position": "left", "title": "Value"}, "1": {}},
        "seriesParams": {"default": {"data_type": "line", "mode": "normal", "value_axis": 1}},
        "aggs": {"default": {"schema": "metric"}}
    }));
    let dashboard = raw(json!({
        "title": "From dashboard",
        "desc": "d",
        "id": "dash-1",
        "y-axis": {
            "value_axes": {"rate": {"position": "right", "title": "Rate"}},
            "series": {
                "a": {"field": "a", "label": "A"},
                "b": {"field": "b", "label": "B", "value_axis": 2}
            }
        }
    }));

    let state = vis_state(&dashboard, &viz);
    assert_eq!(state["title"], json!("From dashboard"));
    assert_eq!(state["params"]["categoryAxes"].as_array().unwrap().len(), 2);
    assert_eq!(state["params"]["valueAxes"][1]["name"], json!("RightAxis-2"));
    assert_eq!(state["params"]["seriesParams"][1]["valueAxis"], json!("ValueAxis-2"));
    assert_eq!(state["params"]["seriesParams"][1]["data"]["id"], json!("2"));
    assert_eq!(state["aggs"][1]["params"]["customLabel"], json!("B"));
}

#[test]
fn test_viz_series_processed_before_dashboard_series() {
    let viz = viz_with(json!({
        "aggs": {"default": {"schema": "metric"}},
        "seriesParams": {"default": {"data_type": "line", "mode": "normal", "value_axis": 1}},
        "series": {"v": {"field": "from-viz", "label": "V"}}
    }));
    let dashboard = raw(json!({
        "y-axis": {"series": {"d": {"field": "from-dash", "label": "D"}}}
    }));
    let generated = generate(&dashboard, &viz).unwrap();
    let aggs = &generated.vis_state.aggs;
    assert_eq!(aggs[0].params.field, json!("from-viz"));
    assert_eq!(aggs[1].params.field, json!("from-dash"));
    assert_eq!(aggs[1].id, "2");
}

#[test]
fn test_missing_num_cat_axes_is_configuration_error() {
    let mut viz = viz_with(json!({})).into_value();
    viz.as_object_mut().unwrap().remove("num_cat_axes");
    let err = generate(&raw(json!({})), &raw(viz)).unwrap_err();
    assert!(matches!(err, GenerateError::IncompleteConfiguration { .. }));
}

#[test]
fn test_every_scalar_is_required() {
    for field in SCALAR_FIELDS {
        let mut viz = viz_with(json!({})).into_value();
        viz.as_object_mut().unwrap().remove(*field);
        let err = generate(&raw(json!({})), &raw(viz)).unwrap_err();
        match err {
            GenerateError::IncompleteConfiguration { missing } => {
                assert_eq!(missing, vec![field.to_string()]);
            }
            other => panic!("{field}: unexpected error {other}"),
        }
    }
}

#[test]
fn test_unknown_schema_is_synthesis_error() {
    let viz = viz_with(json!({
        "aggs": {"a": {"field": "f", "custom_label": "L", "schema": "bucket"}}
    }));
    let err = generate(&raw(json!({})), &viz).unwrap_err();
    assert!(matches!(err, GenerateError::IncompleteSynthesis { .. }));
}

#[test]
fn test_series_entry_without_label_is_configuration_error() {
    let viz = viz_with(json!({
        "aggs": {"default": {"schema": "metric"}},
        "seriesParams": {"default": {"data_type": "line", "mode": "normal", "value_axis": 1, "label": "fallback"}},
        "series": {"s": {"field": "f"}}
    }));
    let err = generate(&raw(json!({})), &viz).unwrap_err();
    match err {
        GenerateError::IncompleteConfiguration { missing } => {
            assert_eq!(missing, vec!["aggs.1.custom_label"]);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_right_axis_keeps_left_position() {
    let viz = viz_with(json!({
        "value_axes": {"r": {"position": "right", "title": "R"}}
    }));
    let state = vis_state(&raw(json!({})), &viz);
    let axis = &state["params"]["valueAxes"][0];
    assert_eq!(axis["name"], json!("RightAxis-1"));
    assert_eq!(axis["position"], json!("left"));
}

#[test]
fn test_viz_series_repeats_viz_value_axes() {
    let viz = viz_with(json!({
        "value_axes": {
            "v1": {"position": "left", "title": "A"},
            "v2": {"position": "right", "title": "B"}
        },
        "series": {"s": {"field": "f", "label": "L", "value_axis": 1, "data_type": "line", "mode": "normal"}}
    }));
    let state = vis_state(&raw(json!({})), &viz);
    let axes: Vec<(&str, &str)> = state["params"]["valueAxes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| (a["id"].as_str().unwrap(), a["name"].as_str().unwrap()))
        .collect();
    assert_eq!(
        axes,
        vec![
            ("ValueAxis-1", "LeftAxis-1"),
            ("ValueAxis-2", "RightAxis-2"),
            ("ValueAxis-3", "LeftAxis-3"),
            ("ValueAxis-4", "RightAxis-4"),
        ]
    );
}

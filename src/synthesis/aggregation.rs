//! Aggregation builder.

use crate::vis_state::{Aggregation, AggregationParams};
use serde_json::Value;

/// Bucket size of a `terms` aggregation.
pub const TERMS_SIZE: u32 = 20;

/// Role of an aggregation, selecting its algorithm and parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggSchema {
    /// Synthesized as `max`.
    Metric,
    /// Synthesized as `terms`, ascending by term.
    Segment,
}

impl AggSchema {
    pub fn parse(schema: &Value) -> Option<Self> {
        match schema.as_str()? {
            "metric" => Some(AggSchema::Metric),
            "segment" => Some(AggSchema::Segment),
            _ => None,
        }
    }
}

/// Builds aggregations with ids `"1"`, `"2"`, ...
#[derive(Debug, Default)]
pub struct AggregationBuilder {
    counter: usize,
}

impl AggregationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An unknown schema yields an aggregation whose `type` is unset.
    pub fn create(&mut self, field: &Value, custom_label: &Value, schema: &Value) -> Aggregation {
        self.counter += 1;
        let mut params = AggregationParams {
            field: field.clone(),
            custom_label: custom_label.clone(),
            size: None,
            order: None,
            order_by: None,
        };

        let agg_type = match AggSchema::parse(schema) {
            Some(AggSchema::Metric) => Some("max".to_string()),
            Some(AggSchema::Segment) => {
                params.size = Some(TERMS_SIZE);
                params.order = Some("asc".to_string());
                params.order_by = Some("_term".to_string());
                Some("terms".to_string())
            }
            None => None,
        };

        Aggregation {
            id: self.counter.to_string(),
            enabled: true,
            agg_type,
            schema: schema.clone(),
            params,
        }
    }
}

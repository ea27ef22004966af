//! Category and value axis builders.

use crate::vis_state::{AxisLabels, AxisScale, AxisTitle, CategoryAxis, ValueAxis};
use serde_json::{Map, Value};

const LABEL_TRUNCATE: u32 = 100;

/// Builds `CategoryAxis-<n>` descriptors with fixed rendering defaults.
#[derive(Debug, Default)]
pub struct CategoryAxisBuilder {
    counter: usize,
}

impl CategoryAxisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> CategoryAxis {
        self.counter += 1;
        CategoryAxis {
            id: format!("CategoryAxis-{}", self.counter),
            axis_type: "category".to_string(),
            position: "bottom".to_string(),
            show: true,
            style: Map::new(),
            scale: AxisScale {
                scale_type: "linear".to_string(),
                mode: None,
            },
            labels: AxisLabels {
                show: true,
                rotate: None,
                filter: None,
                truncate: LABEL_TRUNCATE,
            },
            title: Map::new(),
        }
    }
}

/// Side a value axis is named after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

impl AxisSide {
    /// `"right"` is the right side; anything else, including unset, is left.
    pub fn from_position(position: &Value) -> Self {
        match position.as_str() {
            Some("right") => AxisSide::Right,
            _ => AxisSide::Left,
        }
    }

    fn name_prefix(self) -> &'static str {
        match self {
            AxisSide::Left => "LeftAxis",
            AxisSide::Right => "RightAxis",
        }
    }
}

/// Builds `ValueAxis-<n>` descriptors.
#[derive(Debug, Default)]
pub struct ValueAxisBuilder {
    counter: usize,
}

impl ValueAxisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// An unset title renders as `"Value"`.
    pub fn create(&mut self, position: &Value, title: &Value) -> ValueAxis {
        self.counter += 1;
        let side = AxisSide::from_position(position);
        let text = if title.is_null() {
            Value::String("Value".to_string())
        } else {
            title.clone()
        };

        ValueAxis {
            id: format!("ValueAxis-{}", self.counter),
            name: format!("{}-{}", side.name_prefix(), self.counter),
            axis_type: "value".to_string(),
            // Only the name reflects the side; the drawn position is always left.
            position: "left".to_string(),
            show: true,
            style: Map::new(),
            scale: AxisScale {
                scale_type: "linear".to_string(),
                mode: Some("normal".to_string()),
            },
            labels: AxisLabels {
                show: true,
                rotate: Some(0),
                filter: Some(false),
                truncate: LABEL_TRUNCATE,
            },
            title: AxisTitle { text },
        }
    }
}

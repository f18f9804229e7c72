use serde::{Deserialize, Serialize};

/// Regular polygon inscribed in a circle of `radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolygonLayer {
    pub sides: u32,
    pub radius: f64,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Default for PolygonLayer {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: 50.0,
            fill: "#ffc107".to_string(),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

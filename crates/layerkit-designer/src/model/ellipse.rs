use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EllipseLayer {
    pub radius_x: f64,
    pub radius_y: f64,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Default for EllipseLayer {
    fn default() -> Self {
        Self {
            radius_x: 50.0,
            radius_y: 50.0,
            fill: "#28a745".to_string(),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

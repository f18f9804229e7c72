use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineLayer {
    /// Flat `[x0, y0, x1, y1, ...]` list relative to the layer origin
    pub points: Vec<f64>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for LineLayer {
    fn default() -> Self {
        Self {
            points: vec![0.0, 0.0, 150.0, 0.0],
            stroke: "#000000".to_string(),
            stroke_width: 4.0,
        }
    }
}

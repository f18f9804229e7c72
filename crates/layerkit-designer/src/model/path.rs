use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PathLayer {
    /// SVG path data
    pub data: String,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Default for PathLayer {
    fn default() -> Self {
        Self {
            data: "M0 0 L100 0 L50 80 Z".to_string(),
            fill: "#6f42c1".to_string(),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

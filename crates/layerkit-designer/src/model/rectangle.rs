use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RectLayer {
    pub width: f64,
    pub height: f64,
    pub fill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl Default for RectLayer {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 80.0,
            fill: "#007bff".to_string(),
            stroke: None,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }
}

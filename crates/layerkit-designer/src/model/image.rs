use serde::{Deserialize, Serialize};

/// Visible portion of the source image, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLayer {
    /// URL or data URI of the bitmap
    pub src: String,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropRect>,
}

impl Default for ImageLayer {
    fn default() -> Self {
        Self {
            src: String::new(),
            width: 200.0,
            height: 200.0,
            crop: None,
        }
    }
}

impl ImageLayer {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }
}

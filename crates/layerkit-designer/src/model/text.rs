use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
}

/// Drop shadow painted behind the glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextLayer {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub align: TextAlign,
    pub line_height: f64,
    pub letter_spacing: f64,
    /// Wrapping width; unset means the text is laid out on one unbounded line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl Default for TextLayer {
    fn default() -> Self {
        Self {
            text: "New Text".to_string(),
            font_size: 24.0,
            font_family: "Arial".to_string(),
            fill: "#000000".to_string(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::None,
            align: TextAlign::Left,
            line_height: 1.0,
            letter_spacing: 0.0,
            width: None,
            shadow: None,
        }
    }
}

impl TextLayer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Box occupied by the text. Without a wrapping width the horizontal
    /// extent is unknown to the model and reported as zero.
    pub fn extent(&self) -> (f64, f64) {
        (self.width.unwrap_or(0.0), self.font_size * self.line_height)
    }
}

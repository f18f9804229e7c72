//! # Design Templates
//!
//! Built-in starter layouts. A template is a list of layers in absolute
//! document coordinates; applying one inserts its layers as a single new
//! group with freshly generated ids.

use crate::model::{Layer, LayerKind, RectLayer, TextLayer};
use serde::{Deserialize, Serialize};

/// Template categories for organizing designs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Poster,
    Logo,
}

/// A reusable starter design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub layers: Vec<Layer>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TemplateCategory,
        layers: Vec<Layer>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            layers,
        }
    }
}

fn filled_rect(x: f64, y: f64, width: f64, height: f64, fill: &str) -> Layer {
    Layer::new(
        LayerKind::Rect(RectLayer {
            width,
            height,
            fill: fill.to_string(),
            ..RectLayer::default()
        }),
        x,
        y,
    )
}

fn styled_text(x: f64, y: f64, text: &str, font_size: f64, font_family: &str, fill: &str) -> Layer {
    Layer::new(
        LayerKind::Text(TextLayer {
            font_size,
            font_family: font_family.to_string(),
            fill: fill.to_string(),
            ..TextLayer::new(text)
        }),
        x,
        y,
    )
}

/// The templates shipped with the designer.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "template-1",
            "Modern Poster",
            TemplateCategory::Poster,
            vec![
                filled_rect(50.0, 50.0, 700.0, 500.0, "#f0f4f8"),
                styled_text(100.0, 120.0, "EVENT HEADLINE", 64.0, "Helvetica", "#1e293b"),
                styled_text(
                    100.0,
                    200.0,
                    "A short, catchy description of the event goes here.",
                    24.0,
                    "Arial",
                    "#475569",
                ),
            ],
        ),
        Template::new(
            "template-2",
            "Simple Logo",
            TemplateCategory::Logo,
            vec![
                filled_rect(10.0, 10.0, 80.0, 80.0, "#28a745"),
                styled_text(105.0, 45.0, "BrandName", 32.0, "Verdana", "#343a40"),
            ],
        ),
    ]
}

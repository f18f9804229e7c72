//! Layer model: the typed records that make up a document's scene.
//!
//! A [`Layer`] carries the attributes every layer shares (identity, position,
//! transform, lock/visibility flags) and a [`LayerKind`] payload holding the
//! variant-specific data. Variant fields are only reachable by matching on
//! the kind, so reading text content off a rectangle cannot be expressed.
//!
//! The top-level `Vec<Layer>` of a document is its paint order, back to front.
//! Groups own their children directly; child coordinates are relative to the
//! group's origin.

use layerkit_core::{Bounds, LayerId};
use serde::{Deserialize, Serialize};

mod ellipse;
mod group;
mod image;
mod line;
mod patch;
mod path;
mod polygon;
mod rectangle;
mod text;

pub use ellipse::EllipseLayer;
pub use group::GroupLayer;
pub use image::{CropRect, ImageLayer};
pub use line::LineLayer;
pub use patch::LayerPatch;
pub use path::PathLayer;
pub use polygon::PolygonLayer;
pub use rectangle::RectLayer;
pub use text::{FontStyle, Shadow, TextAlign, TextDecoration, TextLayer};

/// Discriminant of a layer's variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Text,
    Rect,
    Image,
    Ellipse,
    Line,
    Polygon,
    Path,
    Group,
}

impl LayerType {
    /// Default display name for new layers of this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            LayerType::Text => "Text",
            LayerType::Rect => "Rectangle",
            LayerType::Image => "Image",
            LayerType::Ellipse => "Ellipse",
            LayerType::Line => "Line",
            LayerType::Polygon => "Polygon",
            LayerType::Path => "Path",
            LayerType::Group => "Group",
        }
    }
}

/// Variant-specific layer payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    Text(TextLayer),
    Rect(RectLayer),
    Image(ImageLayer),
    Ellipse(EllipseLayer),
    Line(LineLayer),
    Polygon(PolygonLayer),
    Path(PathLayer),
    Group(GroupLayer),
}

impl LayerKind {
    pub fn layer_type(&self) -> LayerType {
        match self {
            LayerKind::Text(_) => LayerType::Text,
            LayerKind::Rect(_) => LayerType::Rect,
            LayerKind::Image(_) => LayerType::Image,
            LayerKind::Ellipse(_) => LayerType::Ellipse,
            LayerKind::Line(_) => LayerType::Line,
            LayerKind::Polygon(_) => LayerType::Polygon,
            LayerKind::Path(_) => LayerType::Path,
            LayerKind::Group(_) => LayerType::Group,
        }
    }

    /// Unscaled width and height of the payload.
    fn base_extent(&self) -> (f64, f64) {
        match self {
            LayerKind::Text(t) => t.extent(),
            LayerKind::Rect(r) => (r.width, r.height),
            LayerKind::Image(i) => (i.width, i.height),
            LayerKind::Ellipse(e) => (e.radius_x * 2.0, e.radius_y * 2.0),
            LayerKind::Polygon(p) => (p.radius * 2.0, p.radius * 2.0),
            // Lines and paths carry no width/height and count as zero-extent.
            LayerKind::Line(_) | LayerKind::Path(_) => (0.0, 0.0),
            LayerKind::Group(g) => g
                .local_bounds()
                .map(|b| (b.width(), b.height()))
                .unwrap_or((0.0, 0.0)),
        }
    }

    fn style(&self) -> Option<LayerStyle> {
        match self {
            LayerKind::Text(t) => Some(LayerStyle {
                fill: Some(t.fill.clone()),
                stroke: None,
                stroke_width: 0.0,
            }),
            LayerKind::Rect(r) => Some(LayerStyle {
                fill: Some(r.fill.clone()),
                stroke: r.stroke.clone(),
                stroke_width: r.stroke_width,
            }),
            LayerKind::Image(_) => None,
            LayerKind::Ellipse(e) => Some(LayerStyle {
                fill: Some(e.fill.clone()),
                stroke: e.stroke.clone(),
                stroke_width: e.stroke_width,
            }),
            LayerKind::Line(l) => Some(LayerStyle {
                fill: None,
                stroke: Some(l.stroke.clone()),
                stroke_width: l.stroke_width,
            }),
            LayerKind::Polygon(p) => Some(LayerStyle {
                fill: Some(p.fill.clone()),
                stroke: p.stroke.clone(),
                stroke_width: p.stroke_width,
            }),
            LayerKind::Path(p) => Some(LayerStyle {
                fill: Some(p.fill.clone()),
                stroke: p.stroke.clone(),
                stroke_width: p.stroke_width,
            }),
            LayerKind::Group(g) => g.style(),
        }
    }
}

/// Generic paint attributes, as seen by collaborators that do not care about
/// the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

/// One visual element of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: LayerId,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    /// Creates a layer with a fresh id, unlocked and visible.
    pub fn new(kind: LayerKind, x: f64, y: f64) -> Self {
        Self {
            id: LayerId::new(),
            name: kind.layer_type().display_name().to_string(),
            x,
            y,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            locked: false,
            visible: true,
            kind,
        }
    }

    /// Text layer with default styling at (100, 100).
    pub fn text() -> Self {
        Self::new(LayerKind::Text(TextLayer::default()), 100.0, 100.0)
    }

    /// Rectangle with default styling at (150, 150).
    pub fn rect() -> Self {
        Self::new(LayerKind::Rect(RectLayer::default()), 150.0, 150.0)
    }

    /// Rectangle with explicit geometry and default styling.
    pub fn rect_at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            LayerKind::Rect(RectLayer {
                width,
                height,
                ..RectLayer::default()
            }),
            x,
            y,
        )
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(LayerKind::Image(ImageLayer::new(src)), 200.0, 200.0)
    }

    pub fn ellipse() -> Self {
        Self::new(LayerKind::Ellipse(EllipseLayer::default()), 200.0, 200.0)
    }

    pub fn line() -> Self {
        Self::new(LayerKind::Line(LineLayer::default()), 100.0, 100.0)
    }

    pub fn polygon() -> Self {
        Self::new(LayerKind::Polygon(PolygonLayer::default()), 250.0, 250.0)
    }

    pub fn path() -> Self {
        Self::new(LayerKind::Path(PathLayer::default()), 100.0, 100.0)
    }

    pub fn layer_type(&self) -> LayerType {
        self.kind.layer_type()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, LayerKind::Group(_))
    }

    /// Width and height including scale. Rotation is not taken into account.
    pub fn extent(&self) -> (f64, f64) {
        let (w, h) = self.kind.base_extent();
        (w * self.scale_x.abs(), h * self.scale_y.abs())
    }

    /// Axis-aligned bounds in the coordinate space of the layer's parent.
    pub fn bounds(&self) -> Bounds {
        match &self.kind {
            LayerKind::Group(g) => match g.local_bounds() {
                Some(b) => Bounds::new(
                    self.x + b.min_x * self.scale_x,
                    self.y + b.min_y * self.scale_y,
                    self.x + b.max_x * self.scale_x,
                    self.y + b.max_y * self.scale_y,
                ),
                None => Bounds::new(self.x, self.y, self.x, self.y),
            },
            _ => {
                let (w, h) = self.extent();
                Bounds::from_origin(self.x, self.y, w, h)
            }
        }
    }

    /// Paint attributes; a group answers with its topmost styled child.
    pub fn style(&self) -> Option<LayerStyle> {
        self.kind.style()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Direct children when this layer is a group.
    pub fn children(&self) -> Option<&[Layer]> {
        match &self.kind {
            LayerKind::Group(g) => Some(&g.layers),
            _ => None,
        }
    }

    /// Finds `id` in this layer or any descendant.
    pub fn find(&self, id: &LayerId) -> Option<&Layer> {
        if &self.id == id {
            return Some(self);
        }
        self.children().and_then(|c| find_layer(c, id))
    }

    pub fn find_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        if &self.id == id {
            return Some(self);
        }
        match &mut self.kind {
            LayerKind::Group(g) => find_layer_mut(&mut g.layers, id),
            _ => None,
        }
    }

    /// Appends this layer's id and all descendant ids to `out`.
    pub fn collect_ids(&self, out: &mut Vec<LayerId>) {
        out.push(self.id.clone());
        if let Some(children) = self.children() {
            for child in children {
                child.collect_ids(out);
            }
        }
    }

    /// Deep copy with freshly generated ids for this layer and every descendant.
    pub fn with_fresh_ids(&self) -> Layer {
        let mut copy = self.clone();
        copy.regenerate_ids();
        copy
    }

    fn regenerate_ids(&mut self) {
        self.id = LayerId::new();
        if let LayerKind::Group(g) = &mut self.kind {
            for child in &mut g.layers {
                child.regenerate_ids();
            }
        }
    }
}

/// Finds a layer anywhere in the tree rooted at `layers`.
pub fn find_layer<'a>(layers: &'a [Layer], id: &LayerId) -> Option<&'a Layer> {
    layers.iter().find_map(|l| l.find(id))
}

pub fn find_layer_mut<'a>(layers: &'a mut [Layer], id: &LayerId) -> Option<&'a mut Layer> {
    layers.iter_mut().find_map(|l| l.find_mut(id))
}

/// Position of a top-level layer in paint order.
pub fn index_of(layers: &[Layer], id: &LayerId) -> Option<usize> {
    layers.iter().position(|l| &l.id == id)
}

/// Index of the top-level layer that is, or contains, `id`.
pub fn top_level_owner(layers: &[Layer], id: &LayerId) -> Option<usize> {
    layers.iter().position(|l| l.find(id).is_some())
}

/// Ids of the groups enclosing `id`, outermost first.
pub fn ancestor_ids(layers: &[Layer], id: &LayerId) -> Vec<LayerId> {
    for layer in layers {
        let Some(children) = layer.children() else {
            continue;
        };
        if find_layer(children, id).is_some() {
            let mut chain = vec![layer.id.clone()];
            chain.extend(ancestor_ids(children, id));
            return chain;
        }
    }
    Vec::new()
}

/// Every id in the tree, depth first.
pub fn all_ids(layers: &[Layer]) -> Vec<LayerId> {
    let mut ids = Vec::new();
    for layer in layers {
        layer.collect_ids(&mut ids);
    }
    ids
}

/// First id that occurs more than once in the tree, if any.
pub fn find_duplicate_id(layers: &[Layer]) -> Option<LayerId> {
    let mut seen = std::collections::HashSet::new();
    all_ids(layers).into_iter().find(|id| !seen.insert(id.clone()))
}

/// Splice-move: remove at `old_index`, insert at `new_index`.
///
/// Returns `false` without touching the sequence when either index is out of range.
pub fn move_index(layers: &mut Vec<Layer>, old_index: usize, new_index: usize) -> bool {
    if old_index >= layers.len() || new_index >= layers.len() {
        return false;
    }
    let layer = layers.remove(old_index);
    layers.insert(new_index, layer);
    true
}

//! Partial layer updates.

use serde::{Deserialize, Serialize};

use super::{Layer, LayerKind};

/// A set of field changes for one layer. Unset fields are left untouched.
///
/// `content` replaces the variant payload and only applies to a layer of the
/// same variant. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<LayerKind>,
}

impl LayerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that moves a layer to `(x, y)`.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_content(mut self, content: LayerKind) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Drops a `content` whose variant does not match `layer`.
    pub fn sanitized_for(mut self, layer: &Layer) -> Self {
        if let Some(content) = &self.content {
            if content.layer_type() != layer.layer_type() {
                tracing::warn!(
                    "Ignoring {:?} content patch for {:?} layer {}",
                    content.layer_type(),
                    layer.layer_type(),
                    layer.id
                );
                self.content = None;
            }
        }
        self
    }

    /// Writes the set fields into `layer`.
    pub fn apply(&self, layer: &mut Layer) {
        if let Some(name) = &self.name {
            layer.name = name.clone();
        }
        if let Some(x) = self.x {
            layer.x = x;
        }
        if let Some(y) = self.y {
            layer.y = y;
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(scale_x) = self.scale_x {
            layer.scale_x = scale_x;
        }
        if let Some(scale_y) = self.scale_y {
            layer.scale_y = scale_y;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(locked) = self.locked {
            layer.locked = locked;
        }
        if let Some(visible) = self.visible {
            layer.visible = visible;
        }
        if let Some(content) = &self.content {
            if content.layer_type() == layer.layer_type() {
                layer.kind = content.clone();
            }
        }
    }

    /// Patch restoring the current values of every field this patch sets.
    pub fn inverse_for(&self, layer: &Layer) -> LayerPatch {
        LayerPatch {
            name: self.name.as_ref().map(|_| layer.name.clone()),
            x: self.x.map(|_| layer.x),
            y: self.y.map(|_| layer.y),
            rotation: self.rotation.map(|_| layer.rotation),
            scale_x: self.scale_x.map(|_| layer.scale_x),
            scale_y: self.scale_y.map(|_| layer.scale_y),
            opacity: self.opacity.map(|_| layer.opacity),
            locked: self.locked.map(|_| layer.locked),
            visible: self.visible.map(|_| layer.visible),
            content: self
                .content
                .as_ref()
                .filter(|c| c.layer_type() == layer.layer_type())
                .map(|_| layer.kind.clone()),
        }
    }

    /// Whether applying this patch would change `layer`.
    pub fn changes(&self, layer: &Layer) -> bool {
        let mut probe = layer.clone();
        self.apply(&mut probe);
        probe != *layer
    }
}

use layerkit_core::Bounds;
use serde::{Deserialize, Serialize};

use super::{Layer, LayerStyle};

/// Composite layer owning its children.
///
/// Children keep their paint order and are positioned relative to the
/// group's origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLayer {
    pub layers: Vec<Layer>,
}

impl GroupLayer {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Union of the children's bounds in group-local coordinates.
    pub fn local_bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.layers.iter().map(Layer::bounds))
    }

    /// Style of the topmost child that has one.
    pub fn style(&self) -> Option<LayerStyle> {
        self.layers.iter().rev().find_map(Layer::style)
    }
}

//! Recorded document mutations.
//!
//! A [`HistoryEntry`] stores everything needed to replay a change forwards
//! and to revert it, so neither direction recomputes anything from the
//! document.

use crate::model::{find_layer_mut, index_of, move_index, Layer, LayerPatch};
use layerkit_core::LayerId;
use serde::{Deserialize, Serialize};

/// One applied mutation of the layer sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(clippy::large_enum_variant)]
pub enum HistoryEntry {
    /// Insert `layer` at `index` of the top-level sequence.
    AddLayer { layer: Layer, index: usize },
    /// Remove the top-level `layer` that sat at `index`.
    DeleteLayer { layer: Layer, index: usize },
    /// Patch a layer anywhere in the tree.
    UpdateLayer {
        id: LayerId,
        forward: LayerPatch,
        inverse: LayerPatch,
    },
    /// Splice-move within the top-level sequence.
    ReorderLayers { old_index: usize, new_index: usize },
    /// Several entries recorded as one user action.
    Batch {
        label: String,
        entries: Vec<HistoryEntry>,
    },
}

impl HistoryEntry {
    pub fn add(layer: Layer, index: usize) -> Self {
        HistoryEntry::AddLayer { layer, index }
    }

    pub fn delete(layer: Layer, index: usize) -> Self {
        HistoryEntry::DeleteLayer { layer, index }
    }

    pub fn update(id: LayerId, forward: LayerPatch, inverse: LayerPatch) -> Self {
        HistoryEntry::UpdateLayer {
            id,
            forward,
            inverse,
        }
    }

    pub fn reorder(old_index: usize, new_index: usize) -> Self {
        HistoryEntry::ReorderLayers {
            old_index,
            new_index,
        }
    }

    /// Wraps `entries` as one action. A single entry is returned unwrapped
    /// and an empty list yields `None`.
    pub fn batch(label: impl Into<String>, mut entries: Vec<HistoryEntry>) -> Option<Self> {
        match entries.len() {
            0 => None,
            1 => entries.pop(),
            _ => Some(HistoryEntry::Batch {
                label: label.into(),
                entries,
            }),
        }
    }

    /// Action tag shown in history lists.
    pub fn label(&self) -> &str {
        match self {
            HistoryEntry::AddLayer { .. } => "ADD_LAYER",
            HistoryEntry::DeleteLayer { .. } => "DELETE_LAYER",
            HistoryEntry::UpdateLayer { .. } => "UPDATE_LAYER",
            HistoryEntry::ReorderLayers { .. } => "REORDER_LAYERS",
            HistoryEntry::Batch { label, .. } => label,
        }
    }

    /// Applies the forward change.
    pub fn apply(&self, layers: &mut Vec<Layer>) {
        match self {
            HistoryEntry::AddLayer { layer, index } => {
                let at = (*index).min(layers.len());
                layers.insert(at, layer.clone());
            }
            HistoryEntry::DeleteLayer { layer, .. } => {
                if let Some(at) = index_of(layers, &layer.id) {
                    layers.remove(at);
                }
            }
            HistoryEntry::UpdateLayer { id, forward, .. } => {
                if let Some(target) = find_layer_mut(layers, id) {
                    forward.apply(target);
                }
            }
            HistoryEntry::ReorderLayers {
                old_index,
                new_index,
            } => {
                move_index(layers, *old_index, *new_index);
            }
            HistoryEntry::Batch { entries, .. } => {
                for entry in entries {
                    entry.apply(layers);
                }
            }
        }
    }

    /// Applies the inverse change.
    pub fn revert(&self, layers: &mut Vec<Layer>) {
        match self {
            HistoryEntry::AddLayer { layer, .. } => {
                if let Some(at) = index_of(layers, &layer.id) {
                    layers.remove(at);
                }
            }
            HistoryEntry::DeleteLayer { layer, index } => {
                let at = (*index).min(layers.len());
                layers.insert(at, layer.clone());
            }
            HistoryEntry::UpdateLayer { id, inverse, .. } => {
                if let Some(target) = find_layer_mut(layers, id) {
                    inverse.apply(target);
                }
            }
            HistoryEntry::ReorderLayers {
                old_index,
                new_index,
            } => {
                move_index(layers, *new_index, *old_index);
            }
            HistoryEntry::Batch { entries, .. } => {
                for entry in entries.iter().rev() {
                    entry.revert(layers);
                }
            }
        }
    }
}

//! Selection operations for designer state.

use super::DesignerState;
use crate::model::Layer;
use layerkit_core::LayerId;

impl DesignerState {
    /// Selects `id`, or the top-level group containing it. Unknown ids are ignored.
    pub fn select(&mut self, id: &LayerId) {
        self.selection.select(&self.layers, id);
    }

    /// Adds a top-level layer to the selection (Shift+click).
    pub fn add_to_selection(&mut self, id: &LayerId) {
        self.selection.add(&self.layers, id);
    }

    pub fn remove_from_selection(&mut self, id: &LayerId) {
        self.selection.remove(id);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.layers);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &LayerId) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[LayerId] {
        self.selection.selected_ids()
    }

    /// The primary selected layer.
    pub fn primary_selection(&self) -> Option<&Layer> {
        self.selection
            .primary()
            .and_then(|id| self.layers.iter().find(|l| &l.id == id))
    }

    /// Selected layers in selection order.
    pub fn selected_layers(&self) -> Vec<&Layer> {
        self.selection.selected_layers(&self.layers)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

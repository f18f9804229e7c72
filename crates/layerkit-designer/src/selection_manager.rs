use crate::model::{index_of, top_level_owner, Layer};
use layerkit_core::LayerId;

/// Manages layer selection state.
///
/// `SelectionManager` is responsible for:
/// - Tracking which top-level layers are selected, in selection order
/// - Designating the first selected layer as the "primary" selection
/// - Click-through selection: picking a layer nested in a group selects the group
/// - Explicit multi-select (Shift+click), where the caller decides expansion
///
/// # Selection Model
///
/// The selection is an ordered list of top-level layer ids without duplicates.
/// Ids that do not resolve against the current layer sequence are ignored, so
/// every operation on an unknown id is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<LayerId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use layerkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// assert_eq!(manager.primary(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[LayerId] {
        &self.selected
    }

    /// The primary selected layer, used by single-target operations.
    pub fn primary(&self) -> Option<&LayerId> {
        self.selected.first()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: &LayerId) -> bool {
        self.selected.contains(id)
    }

    /// Replaces the selection with the layer `id` resolves to.
    ///
    /// A top-level id selects itself. An id nested inside a group selects the
    /// top-level group that owns it.
    ///
    /// # Returns
    ///
    /// `true` if the selection was replaced, `false` if `id` is unknown.
    pub fn select(&mut self, layers: &[Layer], id: &LayerId) -> bool {
        match top_level_owner(layers, id) {
            Some(index) => {
                self.selected = vec![layers[index].id.clone()];
                true
            }
            None => false,
        }
    }

    /// Adds a top-level layer to the selection without group expansion.
    pub fn add(&mut self, layers: &[Layer], id: &LayerId) -> bool {
        if index_of(layers, id).is_none() || self.contains(id) {
            return false;
        }
        self.selected.push(id.clone());
        true
    }

    /// Removes `id` from the selection.
    pub fn remove(&mut self, id: &LayerId) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    /// Selects every top-level layer in paint order.
    pub fn select_all(&mut self, layers: &[Layer]) {
        self.selected = layers.iter().map(|l| l.id.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replaces the selection with `ids`, keeping only known top-level ids.
    pub fn set(&mut self, layers: &[Layer], ids: impl IntoIterator<Item = LayerId>) {
        self.selected.clear();
        for id in ids {
            self.add(layers, &id);
        }
    }

    /// Drops ids that no longer exist at the top level.
    pub fn retain_existing(&mut self, layers: &[Layer]) {
        self.selected.retain(|id| index_of(layers, id).is_some());
    }

    /// Selected layers in selection order.
    pub fn selected_layers<'a>(&self, layers: &'a [Layer]) -> Vec<&'a Layer> {
        self.selected
            .iter()
            .filter_map(|id| layers.iter().find(|l| &l.id == id))
            .collect()
    }

    /// Indices of selected layers, ascending (paint order).
    pub fn selected_indices(&self, layers: &[Layer]) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .selected
            .iter()
            .filter_map(|id| index_of(layers, id))
            .collect();
        indices.sort_unstable();
        indices
    }
}

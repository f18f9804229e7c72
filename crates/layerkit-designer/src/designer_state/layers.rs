//! Layer operations (add, update, delete, lock, clipboard, templates) for designer state.

use super::DesignerState;
use crate::arrange::{build_group, normalize_groups, normalized_origin};
use crate::commands::HistoryEntry;
use crate::model::{
    ancestor_ids, find_duplicate_id, find_layer, find_layer_mut, Layer, LayerKind, LayerPatch,
};
use crate::templates::Template;
use layerkit_core::LayerId;

/// Offset applied to pasted and duplicated layers.
const PASTE_OFFSET: f64 = 10.0;

impl DesignerState {
    /// Appends `layer` to the top of the paint order and selects it.
    ///
    /// A layer whose id (or any descendant id) already exists in the document,
    /// or repeats within the layer itself, is re-identified before insertion.
    pub fn add_layer(&mut self, mut layer: Layer) -> LayerId {
        normalize_groups(&mut layer);
        let mut ids = Vec::new();
        layer.collect_ids(&mut ids);
        let clashes = ids.iter().any(|id| find_layer(&self.layers, id).is_some())
            || find_duplicate_id(std::slice::from_ref(&layer)).is_some();
        let layer = if clashes {
            tracing::warn!("Layer id {} already in use, assigning fresh ids", layer.id);
            layer.with_fresh_ids()
        } else {
            layer
        };

        let id = layer.id.clone();
        let index = self.layers.len();
        self.push_command(HistoryEntry::add(layer, index));
        self.selection.select(&self.layers, &id);
        id
    }

    pub fn add_text(&mut self) -> LayerId {
        self.add_layer(Layer::text())
    }

    pub fn add_rect(&mut self) -> LayerId {
        self.add_layer(Layer::rect())
    }

    pub fn add_image(&mut self, src: impl Into<String>) -> LayerId {
        self.add_layer(Layer::image(src))
    }

    pub fn add_ellipse(&mut self) -> LayerId {
        self.add_layer(Layer::ellipse())
    }

    pub fn add_line(&mut self) -> LayerId {
        self.add_layer(Layer::line())
    }

    pub fn add_polygon(&mut self) -> LayerId {
        self.add_layer(Layer::polygon())
    }

    pub fn add_path(&mut self) -> LayerId {
        self.add_layer(Layer::path())
    }

    /// Applies a partial update to the layer `id`, which may be nested.
    ///
    /// Returns `false` for an unknown id or a patch that changes nothing;
    /// neither is recorded. Group content whose ids would collide with the
    /// rest of the document is dropped. Enclosing groups are re-normalised
    /// so their origin stays on their children's top-left corner, in the
    /// same history entry.
    pub fn update_layer(&mut self, id: &LayerId, patch: LayerPatch) -> bool {
        let Some(layer) = find_layer(&self.layers, id) else {
            tracing::debug!("update_layer: unknown layer {}", id);
            return false;
        };

        let mut patch = patch.sanitized_for(layer);
        if matches!(patch.content, Some(LayerKind::Group(_))) {
            if let Some(dup) = self.duplicate_after(id, &patch) {
                tracing::warn!("Ignoring group content for layer {}: duplicate id {}", id, dup);
                patch.content = None;
            }
        }
        if !patch.changes(layer) {
            return false;
        }
        let inverse = patch.inverse_for(layer);

        let mut chain = ancestor_ids(&self.layers, id);
        chain.push(id.clone());

        let mut staged = Vec::new();
        self.stage(&mut staged, HistoryEntry::update(id.clone(), patch, inverse));
        for group_id in chain.iter().rev() {
            let Some(group) = find_layer(&self.layers, group_id) else {
                continue;
            };
            if let Some(fix) = normalized_origin(group) {
                let inverse = fix.inverse_for(group);
                self.stage(&mut staged, HistoryEntry::update(group_id.clone(), fix, inverse));
            }
        }
        self.commit_staged("UPDATE_LAYER", staged)
    }

    /// First duplicate id the document would hold after applying `patch` to `id`.
    fn duplicate_after(&self, id: &LayerId, patch: &LayerPatch) -> Option<LayerId> {
        let mut patched = self.layers.clone();
        let target = find_layer_mut(&mut patched, id)?;
        patch.apply(target);
        find_duplicate_id(&patched)
    }

    pub fn rename_layer(&mut self, id: &LayerId, name: impl Into<String>) -> bool {
        self.update_layer(id, LayerPatch::new().with_name(name))
    }

    pub fn lock_layer(&mut self, id: &LayerId) -> bool {
        self.update_layer(id, LayerPatch::new().with_locked(true))
    }

    pub fn unlock_layer(&mut self, id: &LayerId) -> bool {
        self.update_layer(id, LayerPatch::new().with_locked(false))
    }

    pub fn toggle_visibility(&mut self, id: &LayerId) -> bool {
        match self.layer(id).map(|l| l.visible) {
            Some(visible) => self.update_layer(id, LayerPatch::new().with_visible(!visible)),
            None => false,
        }
    }

    /// Whether the layer exists and is locked.
    pub fn is_locked(&self, id: &LayerId) -> bool {
        self.layer(id).is_some_and(|l| l.locked)
    }

    /// Deletes the selected layers that are not locked.
    pub fn delete_selected(&mut self) {
        let mut indices = self.selection.selected_indices(&self.layers);
        indices.retain(|&i| !self.layers[i].locked);
        if indices.is_empty() {
            return;
        }

        let mut staged = Vec::new();
        for &index in indices.iter().rev() {
            let layer = self.layers[index].clone();
            self.stage(&mut staged, HistoryEntry::delete(layer, index));
        }
        self.commit_staged("DELETE_LAYERS", staged);
    }

    /// Copies the selected layers, in paint order, to the clipboard.
    pub fn copy_selected(&mut self) {
        self.clipboard = self.selected_in_paint_order();
    }

    /// Appends copies of the clipboard, offset from the originals, and selects them.
    ///
    /// Repeated pastes cascade.
    pub fn paste(&mut self) -> Vec<LayerId> {
        let pasted = self.insert_copies(self.clipboard.clone(), "PASTE");
        let pasted_layers: Vec<Layer> = pasted
            .iter()
            .filter_map(|id| self.layer(id).cloned())
            .collect();
        if !pasted_layers.is_empty() {
            self.clipboard = pasted_layers;
        }
        pasted
    }

    /// Copies and pastes the selection without touching the clipboard.
    pub fn duplicate_selected(&mut self) -> Vec<LayerId> {
        let originals = self.selected_in_paint_order();
        self.insert_copies(originals, "DUPLICATE")
    }

    fn selected_in_paint_order(&self) -> Vec<Layer> {
        self.selection
            .selected_indices(&self.layers)
            .into_iter()
            .map(|i| self.layers[i].clone())
            .collect()
    }

    fn insert_copies(&mut self, originals: Vec<Layer>, label: &str) -> Vec<LayerId> {
        let mut staged = Vec::new();
        let mut ids = Vec::new();
        for original in originals {
            let mut copy = original.with_fresh_ids();
            copy.translate(PASTE_OFFSET, PASTE_OFFSET);
            ids.push(copy.id.clone());
            let index = self.layers.len();
            self.stage(&mut staged, HistoryEntry::add(copy, index));
        }
        if self.commit_staged(label, staged) {
            self.selection.set(&self.layers, ids.iter().cloned());
        }
        ids
    }

    /// Inserts `template` as one new group and selects it.
    pub fn apply_template(&mut self, template: &Template) -> Option<LayerId> {
        if template.layers.is_empty() {
            return None;
        }
        let members = template.layers.iter().map(Layer::with_fresh_ids).collect();
        let mut group = build_group(members);
        group.name = template.name.clone();
        Some(self.add_layer(group))
    }

    /// The built-in templates.
    pub fn templates(&self) -> Vec<Template> {
        crate::templates::builtin_templates()
    }
}

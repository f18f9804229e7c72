//! Z-order and grouping operations for designer state.

use super::DesignerState;
use crate::arrange::{backward_moves, build_group, forward_moves, ungroup_children};
use crate::commands::HistoryEntry;
use layerkit_core::LayerId;

impl DesignerState {
    /// Moves every selected layer one step towards the front.
    pub fn bring_forward(&mut self) {
        let indices = self.selection.selected_indices(&self.layers);
        let moves = forward_moves(self.layers.len(), &indices);
        self.apply_moves("BRING_FORWARD", moves);
    }

    /// Moves every selected layer one step towards the back.
    pub fn send_backward(&mut self) {
        let indices = self.selection.selected_indices(&self.layers);
        let moves = backward_moves(self.layers.len(), &indices);
        self.apply_moves("SEND_BACKWARD", moves);
    }

    fn apply_moves(&mut self, label: &str, moves: Vec<(usize, usize)>) {
        let mut staged = Vec::new();
        for (old_index, new_index) in moves {
            self.stage(&mut staged, HistoryEntry::reorder(old_index, new_index));
        }
        self.commit_staged(label, staged);
    }

    /// Splice-moves the layer at `old_index` to `new_index`.
    pub fn reorder_layers(&mut self, old_index: usize, new_index: usize) {
        let len = self.layers.len();
        if old_index >= len || new_index >= len || old_index == new_index {
            return;
        }
        self.push_command(HistoryEntry::reorder(old_index, new_index));
    }

    /// Folds the selected unlocked layers into one group and selects it.
    ///
    /// The group takes the paint position of the topmost member. Fewer than
    /// two eligible layers is a no-op.
    pub fn group_selection(&mut self) -> Option<LayerId> {
        let mut indices = self.selection.selected_indices(&self.layers);
        indices.retain(|&i| !self.layers[i].locked);
        if indices.len() < 2 {
            return None;
        }

        let members: Vec<_> = indices.iter().map(|&i| self.layers[i].clone()).collect();
        let top = indices[indices.len() - 1];
        let insert_at = top + 1 - indices.len();

        let mut staged = Vec::new();
        for (&index, member) in indices.iter().zip(&members).rev() {
            self.stage(&mut staged, HistoryEntry::delete(member.clone(), index));
        }

        let group = build_group(members);
        let id = group.id.clone();
        self.stage(&mut staged, HistoryEntry::add(group, insert_at));
        self.commit_staged("GROUP", staged);

        self.selection.select(&self.layers, &id);
        Some(id)
    }

    /// Dissolves every selected unlocked group, selecting the released children.
    pub fn ungroup_selection(&mut self) -> Vec<LayerId> {
        let mut indices = self.selection.selected_indices(&self.layers);
        indices.retain(|&i| self.layers[i].is_group() && !self.layers[i].locked);
        if indices.is_empty() {
            return Vec::new();
        }

        let mut staged = Vec::new();
        let mut released = Vec::new();
        for &index in indices.iter().rev() {
            let group = self.layers[index].clone();
            let Some(children) = ungroup_children(&group) else {
                continue;
            };
            self.stage(&mut staged, HistoryEntry::delete(group, index));
            for (offset, child) in children.into_iter().enumerate() {
                released.push(child.id.clone());
                self.stage(&mut staged, HistoryEntry::add(child, index + offset));
            }
        }
        self.commit_staged("UNGROUP", staged);

        self.selection.set(&self.layers, released.iter().cloned());
        released
    }
}

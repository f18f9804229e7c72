//! Transform operations (move, drop, align, distribute) for designer state.

use super::DesignerState;
use crate::commands::HistoryEntry;
use crate::geometry::{alignment_deltas, distribution_deltas, Alignment, Distribution};
use crate::model::{find_layer, Layer, LayerPatch};
use crate::snapping::snap_position;
use layerkit_core::{LayerId, Point};

impl DesignerState {
    /// Translates a layer by `(dx, dy)` without snapping. Locked layers do not move.
    pub fn move_layer(&mut self, id: &LayerId, dx: f64, dy: f64) -> bool {
        let Some((x, y)) = self
            .layer(id)
            .filter(|l| !l.locked)
            .map(|l| (l.x, l.y))
        else {
            return false;
        };
        self.update_layer(id, LayerPatch::position(x + dx, y + dy))
    }

    /// Places a layer at the snap-corrected position for a drop at `(x, y)`.
    pub fn drop_layer(&mut self, id: &LayerId, x: f64, y: f64) -> bool {
        if self.layer(id).is_none_or(|l| l.locked) {
            return false;
        }
        let snapped = snap_position(Point::new(x, y), &self.snap, &self.guides);
        self.update_layer(id, LayerPatch::position(snapped.x, snapped.y))
    }

    /// Selected layers that take part in align and distribute.
    fn arrangeable_selection(&self) -> Vec<&Layer> {
        self.selection
            .selected_layers(&self.layers)
            .into_iter()
            .filter(|l| !l.locked)
            .collect()
    }

    /// Translates each listed layer and records the moves as one action.
    fn apply_deltas(&mut self, label: &str, deltas: Vec<(LayerId, f64, f64)>) {
        let mut staged = Vec::new();
        for (id, dx, dy) in deltas {
            let Some(layer) = find_layer(&self.layers, &id) else {
                continue;
            };
            let patch = LayerPatch::position(layer.x + dx, layer.y + dy);
            let inverse = patch.inverse_for(layer);
            self.stage(&mut staged, HistoryEntry::update(id, patch, inverse));
        }
        self.commit_staged(label, staged);
    }

    pub fn align(&mut self, alignment: Alignment) {
        let deltas = alignment_deltas(&self.arrangeable_selection(), alignment);
        self.apply_deltas(alignment.label(), deltas);
    }

    pub fn distribute(&mut self, axis: Distribution) {
        let deltas = distribution_deltas(&self.arrangeable_selection(), axis);
        self.apply_deltas(axis.label(), deltas);
    }

    pub fn align_left(&mut self) {
        self.align(Alignment::Left);
    }

    pub fn align_right(&mut self) {
        self.align(Alignment::Right);
    }

    pub fn align_top(&mut self) {
        self.align(Alignment::Top);
    }

    pub fn align_bottom(&mut self) {
        self.align(Alignment::Bottom);
    }

    /// Aligns horizontal centers.
    pub fn align_center(&mut self) {
        self.align(Alignment::Center);
    }

    /// Aligns vertical centers.
    pub fn align_middle(&mut self) {
        self.align(Alignment::Middle);
    }

    pub fn distribute_horizontally(&mut self) {
        self.distribute(Distribution::Horizontal);
    }

    pub fn distribute_vertically(&mut self) {
        self.distribute(Distribution::Vertical);
    }
}

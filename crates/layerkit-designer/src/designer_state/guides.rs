//! Guide lines, snap settings and smart guides for designer state.
//!
//! Guides and snap settings are document configuration and are not recorded
//! in history.

use super::DesignerState;
use crate::snapping::{self, Guide, Orientation, SmartGuide};
use layerkit_core::{GuideId, LayerId, Point};
use layerkit_settings::SnapSettings;

impl DesignerState {
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn add_guide(&mut self, orientation: Orientation, position: f64) -> GuideId {
        let guide = Guide::new(orientation, position);
        let id = guide.id.clone();
        self.guides.push(guide);
        id
    }

    pub fn update_guide(&mut self, id: &GuideId, position: f64) -> bool {
        match self.guides.iter_mut().find(|g| &g.id == id) {
            Some(guide) => {
                guide.position = position;
                true
            }
            None => false,
        }
    }

    pub fn remove_guide(&mut self, id: &GuideId) -> bool {
        let before = self.guides.len();
        self.guides.retain(|g| &g.id != id);
        self.guides.len() != before
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap.snap_to_grid = enabled;
    }

    /// Sets the grid spacing. Non-positive sizes are ignored.
    pub fn set_grid_size(&mut self, size: f64) {
        if !(size.is_finite() && size > 0.0) {
            tracing::warn!("Ignoring invalid grid size {}", size);
            return;
        }
        self.snap.grid_size = size;
    }

    pub fn set_snap_settings(&mut self, settings: SnapSettings) {
        self.snap = settings;
    }

    /// Snap-corrected position for a drop at `proposed`.
    pub fn snap_position(&self, proposed: Point) -> Point {
        snapping::snap_position(proposed, &self.snap, &self.guides)
    }

    /// Alignment hints for a layer being dragged.
    pub fn smart_guides(&self, dragging: &LayerId) -> Vec<SmartGuide> {
        match self.layers.iter().find(|l| &l.id == dragging) {
            Some(layer) => {
                snapping::smart_guides(layer, &self.layers, self.snap.smart_guide_threshold)
            }
            None => Vec::new(),
        }
    }
}

//! Snapshot, JSON and document property operations for designer state.

use super::DesignerState;
use crate::arrange::normalize_groups;
use crate::serialization::DocumentSnapshot;
use layerkit_core::DocumentError;
use std::path::Path;

impl DesignerState {
    /// Plain serializable copy of the document.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            layers: self.layers.clone(),
            width: self.width,
            height: self.height,
            background: self.background.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        self.snapshot().to_json()
    }

    /// Creates a state from a JSON snapshot with default settings.
    pub fn from_json(json: &str) -> layerkit_core::Result<Self> {
        let mut state = Self::new();
        state.load_snapshot(DocumentSnapshot::from_json(json)?)?;
        Ok(state)
    }

    /// Replaces the document with `snapshot`.
    ///
    /// History restarts with the loaded layers as its baseline and the
    /// selection is cleared. On error nothing changes.
    pub fn load_snapshot(&mut self, mut snapshot: DocumentSnapshot) -> Result<(), DocumentError> {
        snapshot.validate()?;
        snapshot.layers.iter_mut().for_each(normalize_groups);

        self.history.reset(snapshot.layers.clone());
        self.layers = snapshot.layers;
        self.width = snapshot.width;
        self.height = snapshot.height;
        self.background = snapshot.background;
        self.selection.clear();
        self.is_modified = false;

        tracing::debug!("Loaded document with {} layers", self.layers.len());
        Ok(())
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> layerkit_core::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        self.is_modified = false;
        tracing::debug!("Saved design to {}", path.as_ref().display());
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> layerkit_core::Result<()> {
        let json = std::fs::read_to_string(path.as_ref())?;
        self.load_snapshot(DocumentSnapshot::from_json(&json)?)?;
        Ok(())
    }

    /// Resizes the canvas. Non-positive or non-finite sizes are ignored.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> bool {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            tracing::warn!("Ignoring invalid canvas size {}x{}", width, height);
            return false;
        }
        self.width = width;
        self.height = height;
        self.is_modified = true;
        true
    }

    pub fn set_background(&mut self, color: impl Into<String>) {
        self.background = color.into();
        self.is_modified = true;
    }
}

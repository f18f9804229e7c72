//! Persisted document layout.
//!
//! A document is stored as a plain JSON object
//! `{ "layers": [...], "width": .., "height": .., "background": ".." }`.
//! Decoding validates the invariants the engine relies on.

use crate::model::{find_duplicate_id, Layer};
use layerkit_core::DocumentError;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub layers: Vec<Layer>,
    pub width: f64,
    pub height: f64,
    pub background: String,
}

impl DocumentSnapshot {
    /// Checks id uniqueness across the whole tree and positive dimensions.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(DocumentError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(id) = find_duplicate_id(&self.layers) {
            return Err(DocumentError::DuplicateId { id: id.to_string() });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Decodes and validates a snapshot.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let snapshot: Self = serde_json::from_str(json).map_err(DocumentError::Deserialize)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

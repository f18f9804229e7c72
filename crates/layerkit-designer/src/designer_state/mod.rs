//! Designer state: the mutation façade over a document.
//!
//! Every change to the layer sequence goes through a method on
//! [`DesignerState`], which records an invertible [`HistoryEntry`] for it.
//! Read accessors hand out shared borrows only.
//!
//! This module is split into submodules:
//! - `layers`: Layer creation, updates, deletion, locking, clipboard
//! - `selection`: Selection operations
//! - `arrange`: Z-order and grouping
//! - `transforms`: Move, drop, align, distribute
//! - `history`: Undo/redo and history seeking
//! - `guides`: Guide lines, snapping and smart guides
//! - `file_io`: Snapshots, JSON and document properties

mod arrange;
mod file_io;
mod guides;
mod history;
mod layers;
mod selection;
mod transforms;

use crate::commands::HistoryEntry;
use crate::history::History;
use crate::model::{find_layer, Layer};
use crate::selection_manager::SelectionManager;
use crate::snapping::Guide;
use layerkit_core::LayerId;
use layerkit_settings::{Config, SnapSettings};

/// Owned document plus the editing state around it.
#[derive(Debug, Clone)]
pub struct DesignerState {
    layers: Vec<Layer>,
    selection: SelectionManager,
    history: History,
    clipboard: Vec<Layer>,
    guides: Vec<Guide>,
    snap: SnapSettings,
    width: f64,
    height: f64,
    background: String,
    is_modified: bool,
}

impl DesignerState {
    /// Creates an empty document with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates an empty document seeded from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            layers: Vec::new(),
            selection: SelectionManager::new(),
            history: History::new(config.history.max_entries),
            clipboard: Vec::new(),
            guides: Vec::new(),
            snap: config.snap.clone(),
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background.clone(),
            is_modified: false,
        }
    }

    /// Top-level layers in paint order, back to front.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Looks up a layer anywhere in the tree.
    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        find_layer(&self.layers, id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snap
    }

    /// Whether the document changed since it was created, loaded or saved.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    /// Applies `entry` to the document and records it.
    pub(crate) fn push_command(&mut self, entry: HistoryEntry) {
        entry.apply(&mut self.layers);
        self.history.record(entry);
        self.after_change();
    }

    /// Applies `entry` immediately and queues it for a batched record.
    pub(crate) fn stage(&mut self, staged: &mut Vec<HistoryEntry>, entry: HistoryEntry) {
        entry.apply(&mut self.layers);
        staged.push(entry);
    }

    /// Records already-applied entries as one action. Returns `false` when
    /// nothing was staged.
    pub(crate) fn commit_staged(&mut self, label: &str, staged: Vec<HistoryEntry>) -> bool {
        match HistoryEntry::batch(label, staged) {
            Some(entry) => {
                self.history.record(entry);
                self.after_change();
                true
            }
            None => false,
        }
    }

    fn after_change(&mut self) {
        self.selection.retain_existing(&self.layers);
        self.is_modified = true;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

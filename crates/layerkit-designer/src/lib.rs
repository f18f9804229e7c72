//! # Layerkit Designer
//!
//! This crate provides the in-memory document engine of a 2D design
//! composition tool: the layer scene, selection state, geometric operations
//! and an undo/redo history that records every mutation.
//!
//! ## Core Components
//!
//! ### Document
//! - **Layer Model**: Text, rectangles, images, ellipses, lines, polygons, paths and groups
//! - **Selection Manager**: Ordered selection with group click-through
//! - **Templates**: Built-in starter layouts
//!
//! ### Operations
//! - **Geometry**: Alignment, distribution and bounding boxes
//! - **Snapping**: Grid and guide snapping on drop, smart guides while dragging
//! - **Arrange**: Z-order moves, grouping and ungrouping
//!
//! ### History
//! - **Commands**: Invertible records of applied mutations
//! - **History**: Undo/redo cursor and replay to any retained point
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (mutation façade)
//!   ├── Layers (paint order, back to front)
//!   ├── SelectionManager
//!   ├── History ── HistoryEntry (add / delete / update / reorder / batch)
//!   └── Guides + SnapSettings
//!
//! geometry / snapping / arrange (pure helpers)
//! serialization (DocumentSnapshot JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use layerkit_designer::DesignerState;
//!
//! let mut state = DesignerState::new();
//! let rect = state.add_rect();
//! state.add_text();
//!
//! state.undo();
//! assert_eq!(state.layers().len(), 1);
//! assert_eq!(state.layers()[0].id, rect);
//!
//! state.redo();
//! assert_eq!(state.layers().len(), 2);
//! ```

pub mod arrange;
pub mod commands;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod snapping;
pub mod templates;

pub use commands::HistoryEntry;
pub use designer_state::DesignerState;
pub use geometry::{Alignment, Distribution};
pub use history::History;
pub use model::{
    CropRect, EllipseLayer, FontStyle, GroupLayer, ImageLayer, Layer, LayerKind, LayerPatch,
    LayerStyle, LayerType, LineLayer, PathLayer, PolygonLayer, RectLayer, Shadow, TextAlign,
    TextDecoration, TextLayer,
};
pub use selection_manager::SelectionManager;
pub use serialization::DocumentSnapshot;
pub use snapping::{Edge, Guide, Orientation, SmartGuide};
pub use templates::{builtin_templates, Template, TemplateCategory};

pub use layerkit_core::{Bounds, GuideId, LayerId, Point};

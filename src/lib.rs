//! # Layerkit
//!
//! In-memory document model for a 2D design composition tool:
//! - Typed layers (text, shapes, images, paths, groups) in paint order
//! - Selection with group click-through
//! - Alignment, distribution, grid/guide snapping and smart guides
//! - Z-order moves, grouping and ungrouping
//! - Undo/redo history with replay to any retained point
//!
//! ## Architecture
//!
//! Layerkit is organized as a workspace with multiple crates:
//!
//! 1. **layerkit-core** - Identifiers, geometry primitives, error types
//! 2. **layerkit-settings** - Canvas, snapping and history configuration
//! 3. **layerkit-designer** - Layer model, operations, history and the `DesignerState` façade
//! 4. **layerkit** - This crate; re-exports the public surface and sets up logging

pub use layerkit_core::{Bounds, DocumentError, Error, GuideId, LayerId, Point, Result};
pub use layerkit_designer as designer;
pub use layerkit_designer::{
    builtin_templates, Alignment, DesignerState, Distribution, DocumentSnapshot, Edge, Guide,
    HistoryEntry, Layer, LayerKind, LayerPatch, LayerType, Orientation, SmartGuide, Template,
    TemplateCategory,
};
pub use layerkit_settings::{
    CanvasSettings, Config, HistorySettings, SettingsError, SettingsResult, SnapSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Layerkit {} ({}) logging initialized", VERSION, BUILD_DATE);
    Ok(())
}

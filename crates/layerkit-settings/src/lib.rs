//! Layerkit Settings Crate
//!
//! Handles document defaults, snapping configuration and history retention,
//! with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, HistorySettings, SnapSettings, MAX_HISTORY_ENTRIES};
pub use error::{SettingsError, SettingsResult};

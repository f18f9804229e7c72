//! Configuration and settings management for Layerkit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas defaults (document size, background)
//! - Snapping (grid, guide tolerance, smart guide threshold)
//! - History retention

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default document dimensions and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Document width in px
    pub width: f64,
    /// Document height in px
    pub height: f64,
    /// Background color (CSS hex)
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: "#ffffff".to_string(),
        }
    }
}

/// Snapping behaviour for dropped layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Grid spacing in document px
    pub grid_size: f64,
    /// Round dropped positions to the grid
    pub snap_to_grid: bool,
    /// Distance within which a guide line captures a dropped position
    pub guide_tolerance: f64,
    /// Distance within which edges are reported as aligned while dragging
    pub smart_guide_threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            snap_to_grid: false,
            guide_tolerance: 10.0,
            smart_guide_threshold: 5.0,
        }
    }
}

/// Upper bound on retained history entries.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Undo history retention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of retained history entries
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: MAX_HISTORY_ENTRIES,
        }
    }
}

/// Complete designer configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas defaults
    pub canvas: CanvasSettings,
    /// Snapping configuration
    pub snap: SnapSettings,
    /// History retention
    pub history: HistorySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !positive(self.canvas.width) || !positive(self.canvas.height) {
            return Err(SettingsError::Invalid(
                "Canvas dimensions must be > 0".to_string(),
            ));
        }

        if !positive(self.snap.grid_size) {
            return Err(SettingsError::Invalid("Grid size must be > 0".to_string()));
        }

        if !non_negative(self.snap.guide_tolerance) || !non_negative(self.snap.smart_guide_threshold)
        {
            return Err(SettingsError::Invalid(
                "Snap tolerances must be >= 0".to_string(),
            ));
        }

        if !(1..=MAX_HISTORY_ENTRIES).contains(&self.history.max_entries) {
            return Err(SettingsError::Invalid(format!(
                "History must retain between 1 and {} entries",
                MAX_HISTORY_ENTRIES
            )));
        }

        Ok(())
    }
}

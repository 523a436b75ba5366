//! Configuration for the overlay subsystem
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in the platform config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (spacing, major interval, line weights)
//! - Ruler settings (tick spacing, major interval, placement offsets)
//! - Zoom bounds and step
//! - Viewport-frame workspace
//! - Screen-size presets

use designcanvas_core::{constants, CanvasSize};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Background grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid spacing in document units
    pub size: f64,
    /// Every Nth line is major
    pub major_every: u32,
    /// Whether the grid is shown on startup
    pub visible: bool,
    /// Stroke width of major lines
    pub major_line_width: f64,
    /// Stroke width of minor lines
    pub minor_line_width: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_GRID_SIZE,
            major_every: constants::DEFAULT_GRID_MAJOR_EVERY,
            visible: true,
            major_line_width: 1.0,
            minor_line_width: 0.5,
        }
    }
}

/// Ruler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerSettings {
    /// Distance between ticks in document units
    pub minor_spacing: f64,
    /// Every Nth tick is major and labelled
    pub major_every: u32,
    /// Display offset of the horizontal ruler's origin
    pub horizontal_offset: f64,
    /// Display offset of the vertical ruler's origin
    pub vertical_offset: f64,
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            minor_spacing: constants::DEFAULT_MINOR_TICK_SPACING,
            major_every: constants::DEFAULT_MAJOR_TICK_EVERY,
            horizontal_offset: 8.0,
            vertical_offset: 30.0,
        }
    }
}

/// Zoom settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Lowest zoom factor
    pub min: f64,
    /// Highest zoom factor
    pub max: f64,
    /// Change applied by zoom-in / zoom-out
    pub step: f64,
    /// Zoom factor on mount
    pub initial: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: constants::MIN_ZOOM,
            max: constants::MAX_ZOOM,
            step: constants::ZOOM_STEP,
            initial: 1.0,
        }
    }
}

/// Viewport-frame settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    /// Width of the area the frame may be dragged within, in document units
    pub workspace_width: f64,
    /// Height of the area the frame may be dragged within, in document units
    pub workspace_height: f64,
    /// Draw the "{label} {w}×{h}" caption on the frame
    pub show_label: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            workspace_width: 1600.0,
            workspace_height: 1200.0,
            show_label: true,
        }
    }
}

impl FrameSettings {
    /// Workspace dimensions as a validated canvas size
    pub fn workspace(&self) -> SettingsResult<CanvasSize> {
        Ok(CanvasSize::new(self.workspace_width, self.workspace_height)?)
    }
}

/// A named screen-size preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenPreset {
    /// Lookup key ("desktop", "tablet", ...)
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Width in document units
    pub width: f64,
    /// Height in document units
    pub height: f64,
}

impl ScreenPreset {
    pub fn new(key: &str, label: &str, width: f64, height: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width,
            height,
        }
    }

    /// Preset dimensions as a validated canvas size
    pub fn size(&self) -> SettingsResult<CanvasSize> {
        Ok(CanvasSize::new(self.width, self.height)?)
    }
}

impl std::fmt::Display for ScreenPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} × {}", self.label, self.width, self.height)
    }
}

/// Built-in presets, in selector order
pub fn default_screen_presets() -> Vec<ScreenPreset> {
    vec![
        ScreenPreset::new("desktop", "Desktop", 1200.0, 800.0),
        ScreenPreset::new("tablet", "Tablet", 768.0, 1024.0),
        ScreenPreset::new("mobile", "Mobile", 375.0, 667.0),
        ScreenPreset::new("custom", "Custom", 1200.0, 800.0),
    ]
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preset selected on mount
    pub default_screen: String,
    /// Grid settings
    pub grid: GridSettings,
    /// Ruler settings
    pub rulers: RulerSettings,
    /// Zoom settings
    pub zoom: ZoomSettings,
    /// Viewport-frame settings
    pub frame: FrameSettings,
    /// Screen-size presets, in selector order
    pub screen_sizes: Vec<ScreenPreset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_screen: "desktop".to_string(),
            grid: GridSettings::default(),
            rulers: RulerSettings::default(),
            zoom: ZoomSettings::default(),
            frame: FrameSettings::default(),
            screen_sizes: default_screen_presets(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("designcanvas").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        // Grid
        if !(self.grid.size.is_finite() && self.grid.size >= constants::MIN_SPACING) {
            return Err(ConfigError::out_of_range("grid.size", self.grid.size));
        }
        if self.grid.major_every == 0 {
            return Err(ConfigError::out_of_range("grid.major_every", 0));
        }
        if self.grid.major_line_width < 0.0 || self.grid.minor_line_width < 0.0 {
            return Err(ConfigError::out_of_range(
                "grid.line_width",
                self.grid.major_line_width.min(self.grid.minor_line_width),
            ));
        }

        // Rulers
        if !(self.rulers.minor_spacing.is_finite()
            && self.rulers.minor_spacing >= constants::MIN_SPACING)
        {
            return Err(ConfigError::out_of_range(
                "rulers.minor_spacing",
                self.rulers.minor_spacing,
            ));
        }
        if self.rulers.major_every == 0 {
            return Err(ConfigError::out_of_range("rulers.major_every", 0));
        }

        // Zoom
        let zoom = &self.zoom;
        if !(zoom.min.is_finite() && zoom.min > 0.0) {
            return Err(ConfigError::out_of_range("zoom.min", zoom.min));
        }
        if !(zoom.max.is_finite() && zoom.max >= zoom.min) {
            return Err(ConfigError::out_of_range("zoom.max", zoom.max));
        }
        if !(zoom.step.is_finite() && zoom.step > 0.0) {
            return Err(ConfigError::out_of_range("zoom.step", zoom.step));
        }
        if !(zoom.initial >= zoom.min && zoom.initial <= zoom.max) {
            return Err(ConfigError::out_of_range("zoom.initial", zoom.initial));
        }

        // Frame workspace
        if self.frame.workspace().is_err() {
            return Err(ConfigError::out_of_range(
                "frame.workspace",
                format!(
                    "{} x {}",
                    self.frame.workspace_width, self.frame.workspace_height
                ),
            ));
        }

        // Presets
        let mut seen = HashSet::new();
        for preset in &self.screen_sizes {
            if !seen.insert(preset.key.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.key.clone()));
            }
            if preset.size().is_err() {
                return Err(ConfigError::out_of_range(
                    &format!("screen_sizes.{}", preset.key),
                    format!("{} x {}", preset.width, preset.height),
                ));
            }
        }
        if !seen.contains(self.default_screen.as_str()) {
            return Err(ConfigError::MissingPreset(self.default_screen.clone()));
        }

        Ok(())
    }

    /// Look up a preset by key
    pub fn preset(&self, key: &str) -> Option<&ScreenPreset> {
        self.screen_sizes.iter().find(|preset| preset.key == key)
    }

    /// The preset selected on mount
    pub fn default_preset(&self) -> Option<&ScreenPreset> {
        self.preset(&self.default_screen)
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

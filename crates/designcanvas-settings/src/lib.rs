//! DesignCanvas Settings Crate
//!
//! Handles editor configuration: grid and ruler spacing, zoom bounds,
//! screen-size presets, and their persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    default_screen_presets, Config, FrameSettings, GridSettings, RulerSettings, ScreenPreset,
    ZoomSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

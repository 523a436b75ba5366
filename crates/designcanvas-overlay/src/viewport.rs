//! Viewport zoom and canvas size.
//!
//! Holds the zoom factor (clamped to configurable bounds) and the canvas
//! dimensions that every overlay is computed against.

use std::fmt;

use designcanvas_core::{constants, CanvasError, CanvasSize, Result};
use designcanvas_settings::ZoomSettings;
use serde::Serialize;

/// Inclusive zoom range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomBounds {
    min: f64,
    max: f64,
}

impl ZoomBounds {
    /// Creates bounds, requiring `0 < min <= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(CanvasError::InvalidZoomBounds { min, max }.into());
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a raw zoom request into range.
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: constants::MIN_ZOOM,
            max: constants::MAX_ZOOM,
        }
    }
}

/// A zoom factor that is always finite and positive.
///
/// Obtain one through [`Viewport`] (clamped to its bounds) or
/// [`ZoomFactor::new`]; `1.0` is 100%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    pub const IDENTITY: ZoomFactor = ZoomFactor(1.0);

    /// Wraps a raw factor, clamping it into the default bounds.
    /// Non-finite input yields `1.0`.
    pub fn new(zoom: f64) -> Self {
        if zoom.is_finite() {
            Self(ZoomBounds::default().clamp(zoom))
        } else {
            Self::IDENTITY
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }

    /// Zoom as a rounded percentage (1.0 → 100).
    pub fn percent(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Represents the viewport state (zoom and canvas size).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: ZoomFactor,
    bounds: ZoomBounds,
    step: f64,
    canvas: CanvasSize,
}

impl Viewport {
    /// Creates a viewport at 100% with the default bounds.
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            zoom: ZoomFactor::IDENTITY,
            bounds: ZoomBounds::default(),
            step: constants::ZOOM_STEP,
            canvas,
        }
    }

    /// Creates a viewport from zoom settings.
    pub fn with_settings(canvas: CanvasSize, settings: &ZoomSettings) -> Result<Self> {
        let bounds = ZoomBounds::new(settings.min, settings.max)?;
        if !(settings.step.is_finite() && settings.step > 0.0) {
            return Err(CanvasError::InvalidSpacing {
                name: "zoom step",
                value: settings.step,
            }
            .into());
        }
        let mut viewport = Self {
            zoom: ZoomFactor::IDENTITY,
            bounds,
            step: settings.step,
            canvas,
        };
        viewport.set_zoom(settings.initial);
        Ok(viewport)
    }

    /// Gets the canvas size.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Replaces the canvas size.
    pub fn set_canvas_size(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
    }

    /// Gets the current zoom factor.
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    /// Sets the zoom, clamped to the bounds. Non-finite requests are ignored.
    ///
    /// Returns true if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let clamped = ZoomFactor(self.bounds.clamp(zoom));
        let changed = clamped != self.zoom;
        self.zoom = clamped;
        changed
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom.get() + self.step)
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom.get() - self.step)
    }

    /// Resets zoom to 1.0 (100%), clamped to the bounds.
    pub fn reset_zoom(&mut self) -> bool {
        self.set_zoom(1.0)
    }

    /// Canvas dimensions in display pixels at the current zoom.
    pub fn display_size(&self) -> (f64, f64) {
        self.canvas.scaled(self.zoom.get())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zoom: {} | Canvas: {}", self.zoom, self.canvas)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}

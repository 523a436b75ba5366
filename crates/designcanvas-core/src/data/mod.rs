//! Data models shared by every DesignCanvas crate
//!
//! This module provides:
//! - Points in the three coordinate frames (document, display, screen)
//! - The drawing surface's bounding rectangle
//! - Validated canvas dimensions
//! - Ruler/axis identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;
use crate::error::{CanvasError, Result};

/// Axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis, measured by the top ruler.
    X,
    /// Vertical axis, measured by the side ruler.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A point in document space (unscaled canvas content units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocPoint {
    pub x: f64,
    pub y: f64,
}

impl DocPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in display space: document space scaled by the zoom factor,
/// measured from the canvas top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen (viewport) space, as reported by pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta(&self, other: &ScreenPoint) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Bounding rectangle of the drawing surface in screen space, captured at
/// the moment of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner in screen space.
    pub fn origin(&self) -> ScreenPoint {
        ScreenPoint::new(self.left, self.top)
    }

    /// Whether a screen point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: &ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

/// Canvas dimensions in document units.
///
/// Always finite and strictly positive; construct through [`CanvasSize::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCanvasSize", into = "RawCanvasSize")]
pub struct CanvasSize {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct RawCanvasSize {
    width: f64,
    height: f64,
}

impl TryFrom<RawCanvasSize> for CanvasSize {
    type Error = CanvasError;

    fn try_from(raw: RawCanvasSize) -> std::result::Result<Self, Self::Error> {
        CanvasSize::validated(raw.width, raw.height)
    }
}

impl From<CanvasSize> for RawCanvasSize {
    fn from(size: CanvasSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl CanvasSize {
    /// Desktop preset dimensions.
    pub const DESKTOP: CanvasSize = CanvasSize {
        width: 1200.0,
        height: 800.0,
    };

    /// Creates a canvas size, rejecting non-finite, non-positive or
    /// oversized dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self::validated(width, height)?)
    }

    fn validated(width: f64, height: f64) -> std::result::Result<Self, CanvasError> {
        let valid = |v: f64| v.is_finite() && v > 0.0 && v <= constants::MAX_CANVAS_DIMENSION;
        if !(valid(width) && valid(height)) {
            return Err(CanvasError::InvalidCanvasSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length along the given axis.
    pub fn length(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Geometric centre in document space.
    pub fn center(&self) -> DocPoint {
        DocPoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Dimensions after scaling by `zoom`, as `(width, height)` display pixels.
    pub fn scaled(&self, zoom: f64) -> (f64, f64) {
        (self.width * zoom, self.height * zoom)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::DESKTOP
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

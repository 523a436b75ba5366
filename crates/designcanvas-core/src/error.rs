//! Error handling for DesignCanvas
//!
//! The geometry layer never fails: degenerate inputs produce empty output and
//! out-of-range zoom requests are clamped. Errors only arise at the
//! configuration boundary, where a caller hands us a canvas size or a preset
//! key we cannot accept.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Canvas error type
///
/// Represents contract violations at the canvas configuration boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Canvas dimensions must be finite, strictly positive and at most
    /// [`MAX_CANVAS_DIMENSION`](crate::constants::MAX_CANVAS_DIMENSION)
    #[error("Invalid canvas size {width} x {height}: dimensions must be finite, > 0 and <= 100000")]
    InvalidCanvasSize {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// No screen-size preset is registered under this key
    #[error("Unknown screen size preset: {key}")]
    UnknownScreenPreset {
        /// The key that was requested.
        key: String,
    },

    /// Zoom bounds must satisfy 0 < min <= max
    #[error("Invalid zoom bounds [{min}, {max}]")]
    InvalidZoomBounds {
        /// The requested lower bound.
        min: f64,
        /// The requested upper bound.
        max: f64,
    },

    /// A spacing or interval parameter was not usable
    #[error("Invalid {name}: {value}")]
    InvalidSpacing {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Main error type for DesignCanvas
///
/// A unified error type used in public APIs across the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas configuration error
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a canvas configuration error
    pub fn is_canvas_error(&self) -> bool {
        matches!(self, Error::Canvas(_))
    }

    /// Check if this error names an unknown screen preset
    pub fn is_unknown_preset(&self) -> bool {
        matches!(self, Error::Canvas(CanvasError::UnknownScreenPreset { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

//! Coordinate transforms between document, display and screen space.
//!
//! - Document space: unscaled canvas content units.
//! - Display space: document space scaled by the zoom factor, measured from
//!   the canvas top-left.
//! - Screen space: the viewport coordinates pointer events arrive in.
//!
//! ```text
//! screen   = document * zoom + surface_origin
//! document = (screen - surface_origin) / zoom
//! ```
//!
//! Intermediate math stays in `f64`; only reported values are rounded.

use designcanvas_core::{DisplayPoint, DocPoint, ScreenPoint, SurfaceRect};
use serde::{Deserialize, Serialize};

use crate::viewport::ZoomFactor;

/// Rounds a coordinate for display, half away from zero.
pub fn round_coordinate(value: f64) -> i64 {
    value.round() as i64
}

/// Converts a ruler's screen-space offset into an integer document unit.
pub fn ruler_offset_to_document(offset: f64, zoom: ZoomFactor) -> i64 {
    round_coordinate(offset / zoom.get())
}

/// Transform for one surface placement and zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSpace {
    zoom: ZoomFactor,
    origin: ScreenPoint,
}

impl CoordinateSpace {
    /// `origin` is the drawing surface's top-left corner in screen space.
    pub fn new(zoom: ZoomFactor, origin: ScreenPoint) -> Self {
        Self { zoom, origin }
    }

    /// Transform for a surface bounding rectangle.
    pub fn for_surface(zoom: ZoomFactor, surface: &SurfaceRect) -> Self {
        Self::new(zoom, surface.origin())
    }

    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    pub fn screen_to_document(&self, screen: ScreenPoint) -> DocPoint {
        let z = self.zoom.get();
        DocPoint::new((screen.x - self.origin.x) / z, (screen.y - self.origin.y) / z)
    }

    pub fn document_to_screen(&self, document: DocPoint) -> ScreenPoint {
        let z = self.zoom.get();
        ScreenPoint::new(document.x * z + self.origin.x, document.y * z + self.origin.y)
    }

    pub fn document_to_display(&self, document: DocPoint) -> DisplayPoint {
        let z = self.zoom.get();
        DisplayPoint::new(document.x * z, document.y * z)
    }

    pub fn display_to_document(&self, display: DisplayPoint) -> DocPoint {
        let z = self.zoom.get();
        DocPoint::new(display.x / z, display.y / z)
    }

    pub fn screen_to_display(&self, screen: ScreenPoint) -> DisplayPoint {
        DisplayPoint::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }

    /// Captures every representation of one pointer event at once.
    pub fn capture(&self, screen: ScreenPoint) -> MousePosition {
        MousePosition::from_document(self.screen_to_document(screen), screen)
    }
}

/// Pointer position in every frame, taken from a single event.
///
/// `canvas_x`/`canvas_y` alias `x`/`y`; both pairs are always written
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MousePosition {
    /// Document x, rounded.
    pub x: i64,
    /// Document y, rounded.
    pub y: i64,
    /// Alias of `x`.
    pub canvas_x: i64,
    /// Alias of `y`.
    pub canvas_y: i64,
    /// Screen x of the originating event.
    pub screen_x: i64,
    /// Screen y of the originating event.
    pub screen_y: i64,
}

impl MousePosition {
    /// Builds a position from a document point the scene canvas already
    /// resolved, plus the screen point of the same event.
    pub fn from_document(document: DocPoint, screen: ScreenPoint) -> Self {
        let x = round_coordinate(document.x);
        let y = round_coordinate(document.y);
        Self {
            x,
            y,
            canvas_x: x,
            canvas_y: y,
            screen_x: round_coordinate(screen.x),
            screen_y: round_coordinate(screen.y),
        }
    }

    pub fn document(&self) -> DocPoint {
        DocPoint::new(self.x as f64, self.y as f64)
    }

    pub fn screen(&self) -> ScreenPoint {
        ScreenPoint::new(self.screen_x as f64, self.screen_y as f64)
    }
}

/// Captures a pointer event against a surface rectangle and zoom.
pub fn capture(screen: ScreenPoint, surface: &SurfaceRect, zoom: ZoomFactor) -> MousePosition {
    CoordinateSpace::for_surface(zoom, surface).capture(screen)
}

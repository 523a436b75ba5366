//! Shared overlay state.
//!
//! The single source of truth the views read from. Mutations are plain
//! setters; views derive everything else on demand.

use designcanvas_core::{Axis, CanvasSize, ScreenPoint};
use serde::Serialize;

use crate::coordinates::MousePosition;
use crate::viewport::{Viewport, ZoomFactor};

/// Active hover over one of the rulers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RulerHover {
    pub axis: Axis,
    /// Document coordinate under the pointer on `axis`.
    pub value: i64,
    /// Screen point the hover was reported at.
    pub screen: ScreenPoint,
}

#[derive(Debug, Clone)]
pub struct OverlayState {
    viewport: Viewport,
    mouse: MousePosition,
    ruler_hover: Option<RulerHover>,
    pointer_over_surface: bool,
    show_grid: bool,
    object_count: usize,
}

impl OverlayState {
    pub fn new(viewport: Viewport, show_grid: bool) -> Self {
        Self {
            viewport,
            mouse: MousePosition::default(),
            ruler_hover: None,
            pointer_over_surface: false,
            show_grid,
            object_count: 0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn zoom(&self) -> ZoomFactor {
        self.viewport.zoom()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.viewport.canvas()
    }

    pub fn mouse(&self) -> MousePosition {
        self.mouse
    }

    pub fn ruler_hover(&self) -> Option<RulerHover> {
        self.ruler_hover
    }

    pub fn pointer_over_surface(&self) -> bool {
        self.pointer_over_surface
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Stores a pointer sample. Every field is replaced at once.
    pub fn record_pointer(&mut self, position: MousePosition) {
        self.mouse = position;
    }

    pub fn record_ruler_hover(&mut self, hover: RulerHover) {
        self.ruler_hover = Some(hover);
    }

    pub fn clear_ruler_hover(&mut self) {
        self.ruler_hover = None;
    }

    pub fn pointer_entered(&mut self) {
        self.pointer_over_surface = true;
    }

    /// Marks the pointer as off the surface. Ruler hover is left alone.
    pub fn pointer_left(&mut self) {
        self.pointer_over_surface = false;
    }

    /// Returns true if the clamped zoom differs from the previous one.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.viewport.set_zoom(zoom)
    }

    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        self.viewport.set_canvas_size(size);
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    pub fn set_object_count(&mut self, count: usize) {
        self.object_count = count;
    }

    pub fn has_objects(&self) -> bool {
        self.object_count > 0
    }

    /// Axis guides need both a pointer over the surface and something drawn.
    pub fn guides_visible(&self) -> bool {
        self.pointer_over_surface && self.has_objects()
    }

    /// Whether the pointer readout should be shown.
    pub fn coordinates_visible(&self) -> bool {
        self.pointer_over_surface || self.ruler_hover.is_some()
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new(Viewport::default(), true)
    }
}

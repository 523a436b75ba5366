//! One-line status summary for the editor footer.

use std::fmt;

use designcanvas_core::CanvasSize;
use serde::Serialize;

use crate::coordinates::MousePosition;
use crate::state::OverlayState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub mouse: MousePosition,
    pub canvas: CanvasSize,
    pub zoom_percent: i64,
    pub object_count: usize,
}

impl StatusReport {
    pub fn from_state(state: &OverlayState) -> Self {
        Self {
            mouse: state.mouse(),
            canvas: state.canvas(),
            zoom_percent: state.zoom().percent(),
            object_count: state.object_count(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mouse: {}, {} | Canvas: {} | Zoom: {}% | Objects: {}",
            self.mouse.x, self.mouse.y, self.canvas, self.zoom_percent, self.object_count
        )
    }
}

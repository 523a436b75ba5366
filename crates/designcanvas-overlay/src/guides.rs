//! Axis guides: a crosshair through the pointer plus the canvas centre lines.

use designcanvas_core::{constants, DisplayPoint};
use serde::Serialize;
use smallvec::SmallVec;

use crate::grid::Orientation;
use crate::state::OverlayState;

const POINTER_OPACITY: f64 = 0.6;
const CENTER_OPACITY: f64 = 0.4;
const MARKER_OPACITY: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GuideKind {
    /// Follows the pointer.
    Pointer,
    /// Fixed at the canvas centre.
    Center,
}

/// A full-span guide line in display space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideLine {
    pub kind: GuideKind,
    pub orientation: Orientation,
    /// x for vertical lines, y for horizontal ones.
    pub position: f64,
    pub length: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenterMarker {
    pub center: DisplayPoint,
    pub radius: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuideOverlay {
    /// Pointer crosshair first, then centre lines; vertical before horizontal.
    pub lines: SmallVec<[GuideLine; 4]>,
    pub marker: CenterMarker,
}

impl GuideOverlay {
    pub fn lines_of(&self, kind: GuideKind) -> impl Iterator<Item = &GuideLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }
}

pub struct AxisGuides;

impl AxisGuides {
    /// Computes the guides, or `None` when they are hidden.
    pub fn compute(state: &OverlayState) -> Option<GuideOverlay> {
        if !state.guides_visible() {
            return None;
        }

        let z = state.zoom().get();
        let (width, height) = state.canvas().scaled(z);
        let mouse = state.mouse();
        let center = state.canvas().center();
        let center = DisplayPoint::new(center.x * z, center.y * z);

        let guide = |kind, orientation, position, opacity| GuideLine {
            kind,
            orientation,
            position,
            length: match orientation {
                Orientation::Vertical => height,
                Orientation::Horizontal => width,
            },
            opacity,
        };

        let lines = SmallVec::from_buf([
            guide(
                GuideKind::Pointer,
                Orientation::Vertical,
                mouse.canvas_x as f64 * z,
                POINTER_OPACITY,
            ),
            guide(
                GuideKind::Pointer,
                Orientation::Horizontal,
                mouse.canvas_y as f64 * z,
                POINTER_OPACITY,
            ),
            guide(GuideKind::Center, Orientation::Vertical, center.x, CENTER_OPACITY),
            guide(GuideKind::Center, Orientation::Horizontal, center.y, CENTER_OPACITY),
        ]);

        Some(GuideOverlay {
            lines,
            marker: CenterMarker {
                center,
                radius: constants::CENTER_MARKER_RADIUS,
                opacity: MARKER_OPACITY,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::MousePosition;
    use designcanvas_core::{DocPoint, ScreenPoint};

    fn active_state() -> OverlayState {
        let mut state = OverlayState::default();
        state.pointer_entered();
        state.set_object_count(1);
        state.record_pointer(MousePosition::from_document(
            DocPoint::new(300.0, 200.0),
            ScreenPoint::new(0.0, 0.0),
        ));
        state
    }

    #[test]
    fn test_hidden_without_objects() {
        let mut state = active_state();
        state.set_object_count(0);
        assert!(AxisGuides::compute(&state).is_none());
    }

    #[test]
    fn test_hidden_off_surface() {
        let mut state = active_state();
        state.pointer_left();
        assert!(AxisGuides::compute(&state).is_none());
    }

    #[test]
    fn test_positions_at_zoom() {
        let mut state = active_state();
        state.set_zoom(2.0);
        let overlay = AxisGuides::compute(&state).unwrap();

        let pointer: Vec<_> = overlay.lines_of(GuideKind::Pointer).collect();
        assert_eq!(pointer[0].position, 600.0);
        assert_eq!(pointer[0].length, 1600.0);
        assert_eq!(pointer[1].position, 400.0);
        assert_eq!(pointer[1].length, 2400.0);
        assert!(pointer.iter().all(|l| l.opacity == 0.6));

        let center: Vec<_> = overlay.lines_of(GuideKind::Center).collect();
        assert_eq!(center[0].position, 1200.0);
        assert_eq!(center[1].position, 800.0);
        assert!(center.iter().all(|l| l.opacity == 0.4));

        assert_eq!(overlay.marker.center, DisplayPoint::new(1200.0, 800.0));
        assert_eq!(overlay.marker.radius, 4.0);
    }
}

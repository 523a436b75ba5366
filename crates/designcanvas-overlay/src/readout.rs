//! Floating coordinate readout shown next to the pointer.

use designcanvas_core::{constants, ScreenPoint};
use serde::Serialize;

use crate::state::OverlayState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    pub text: String,
    /// Top-left of the tooltip in screen space.
    pub anchor: ScreenPoint,
}

fn anchor_for(point: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(
        point.x + constants::READOUT_OFFSET_X,
        point.y + constants::READOUT_OFFSET_Y,
    )
}

/// Builds the readout, or `None` when coordinates are hidden.
///
/// A ruler hover takes precedence over the pointer position.
pub fn compute(state: &OverlayState) -> Option<Readout> {
    if let Some(hover) = state.ruler_hover() {
        return Some(Readout {
            text: format!("{}: {}", hover.axis, hover.value),
            anchor: anchor_for(hover.screen),
        });
    }
    if !state.pointer_over_surface() {
        return None;
    }
    let mouse = state.mouse();
    Some(Readout {
        text: format!("{}, {}", mouse.x, mouse.y),
        anchor: anchor_for(mouse.screen()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::MousePosition;
    use crate::state::RulerHover;
    use designcanvas_core::{Axis, DocPoint};

    #[test]
    fn test_hidden_off_surface() {
        assert!(compute(&OverlayState::default()).is_none());
    }

    #[test]
    fn test_pointer_readout() {
        let mut state = OverlayState::default();
        state.pointer_entered();
        state.record_pointer(MousePosition::from_document(
            DocPoint::new(-12.0, 48.6),
            ScreenPoint::new(200.0, 150.0),
        ));
        let readout = compute(&state).unwrap();
        assert_eq!(readout.text, "-12, 49");
        assert_eq!(readout.anchor, ScreenPoint::new(210.0, 120.0));
    }

    #[test]
    fn test_ruler_hover_wins() {
        let mut state = OverlayState::default();
        state.pointer_entered();
        state.record_ruler_hover(RulerHover {
            axis: Axis::Y,
            value: 75,
            screen: ScreenPoint::new(20.0, 105.0),
        });
        let readout = compute(&state).unwrap();
        assert_eq!(readout.text, "y: 75");
        assert_eq!(readout.anchor, ScreenPoint::new(30.0, 75.0));
    }
}

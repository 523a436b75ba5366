//! Event type definitions for the event bus.
//!
//! Events fall into two categories: raw window-level pointer events that
//! drive drag gestures, and overlay events that announce state changes to
//! the host UI (status bar, toolbar, scene canvas).

use serde::{Deserialize, Serialize};

use crate::data::{CanvasSize, ScreenPoint};

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Window-level pointer input
    Pointer(PointerEvent),
    /// Overlay state changes
    Overlay(OverlayEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Pointer(_) => EventCategory::Pointer,
            AppEvent::Overlay(_) => EventCategory::Overlay,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Pointer(e) => e.description(),
            AppEvent::Overlay(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Pointer move/press/release events.
    Pointer,
    /// Overlay state change events.
    Overlay,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Pointer => write!(f, "Pointer"),
            EventCategory::Overlay => write!(f, "Overlay"),
        }
    }
}

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    /// Pointer moved.
    Move,
    /// Button pressed.
    Down,
    /// Button released.
    Up,
}

/// A pointer event in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened, in screen space.
    pub position: ScreenPoint,
}

impl PointerEvent {
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Move,
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Down,
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: PointerKind::Up,
            position: ScreenPoint::new(x, y),
        }
    }

    fn description(&self) -> String {
        format!(
            "Pointer {:?} at ({:.1}, {:.1})",
            self.kind, self.position.x, self.position.y
        )
    }
}

/// Overlay state change events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayEvent {
    /// Zoom factor changed.
    ZoomChanged {
        /// The new zoom factor.
        zoom: f64,
    },
    /// Canvas size replaced.
    CanvasResized {
        /// The new canvas size.
        size: CanvasSize,
        /// Preset key, if the size came from a preset.
        preset: Option<String>,
    },
    /// Grid visibility toggled.
    GridToggled {
        /// Whether the grid is now visible.
        visible: bool,
    },
    /// Pointer entered or left the drawing surface.
    SurfaceHover {
        /// Whether the pointer is over the surface.
        inside: bool,
    },
    /// Number of user-visible objects changed.
    ObjectsChanged {
        /// Current object count.
        count: usize,
    },
    /// Clear-all removed every user object.
    CanvasCleared {
        /// Number of objects removed.
        removed: usize,
    },
    /// Viewport frame moved.
    FrameMoved {
        /// New top-left x in display pixels.
        x: f64,
        /// New top-left y in display pixels.
        y: f64,
    },
}

impl OverlayEvent {
    fn description(&self) -> String {
        match self {
            OverlayEvent::ZoomChanged { zoom } => {
                format!("Zoom changed to {}%", (zoom * 100.0).round())
            }
            OverlayEvent::CanvasResized { size, preset } => match preset {
                Some(key) => format!("Canvas resized to {} ({})", size, key),
                None => format!("Canvas resized to {}", size),
            },
            OverlayEvent::GridToggled { visible } => {
                format!("Grid {}", if *visible { "shown" } else { "hidden" })
            }
            OverlayEvent::SurfaceHover { inside } => format!(
                "Pointer {} surface",
                if *inside { "entered" } else { "left" }
            ),
            OverlayEvent::ObjectsChanged { count } => format!("{} objects on canvas", count),
            OverlayEvent::CanvasCleared { removed } => {
                format!("Canvas cleared ({} removed)", removed)
            }
            OverlayEvent::FrameMoved { x, y } => format!("Frame moved to ({:.1}, {:.1})", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            AppEvent::Pointer(PointerEvent::moved(1.0, 2.0)).category(),
            EventCategory::Pointer
        );
        assert_eq!(
            AppEvent::Overlay(OverlayEvent::GridToggled { visible: true }).category(),
            EventCategory::Overlay
        );
    }

    #[test]
    fn test_descriptions() {
        let event = AppEvent::Overlay(OverlayEvent::ZoomChanged { zoom: 1.25 });
        assert_eq!(event.description(), "Zoom changed to 125%");

        let event = AppEvent::Overlay(OverlayEvent::CanvasResized {
            size: CanvasSize::new(375.0, 667.0).unwrap(),
            preset: Some("mobile".to_string()),
        });
        assert_eq!(event.description(), "Canvas resized to 375 × 667 (mobile)");
    }

    #[test]
    fn test_event_serializes() {
        let event = AppEvent::Pointer(PointerEvent::up(3.0, 4.0));
        let json = serde_json::to_string(&event).unwrap();
        let back: AppEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

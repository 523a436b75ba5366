//! Draggable viewport frame.
//!
//! The frame is a `frame × zoom` rectangle kept inside a `bounds × zoom`
//! workspace. Pressing inside it starts a drag that listens for
//! window-level pointer events on the session bus; the listener lives
//! exactly as long as the drag.

use std::fmt;
use std::sync::{Arc, Weak};

use designcanvas_core::{
    thread_safe, AppEvent, CanvasSize, EventBus, EventFilter, OverlayEvent, PointerKind,
    ScreenPoint, Subscription, ThreadSafe, WeakThreadSafe,
};
use serde::Serialize;

use crate::viewport::ZoomFactor;

/// Top-left of the frame in display pixels, relative to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FramePosition {
    pub x: f64,
    pub y: f64,
}

/// The frame's rectangle in display pixels, relative to the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

enum DragState {
    Idle,
    Dragging {
        /// Pointer position minus frame top-left at press time.
        offset: (f64, f64),
        _subscription: Subscription,
    },
}

impl fmt::Debug for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragState::Idle => write!(f, "Idle"),
            DragState::Dragging { offset, .. } => write!(f, "Dragging({:?})", offset),
        }
    }
}

#[derive(Debug)]
struct FrameInner {
    frame: CanvasSize,
    bounds: CanvasSize,
    zoom: ZoomFactor,
    /// Workspace top-left in screen space.
    origin: ScreenPoint,
    /// `None` until the frame is first moved; it is then centred.
    position: Option<FramePosition>,
    label: String,
    drag: DragState,
}

impl FrameInner {
    fn max_offset(&self) -> (f64, f64) {
        let z = self.zoom.get();
        (
            ((self.bounds.width() - self.frame.width()) * z).max(0.0),
            ((self.bounds.height() - self.frame.height()) * z).max(0.0),
        )
    }

    fn clamp(&self, x: f64, y: f64) -> FramePosition {
        let (max_x, max_y) = self.max_offset();
        FramePosition {
            x: x.clamp(0.0, max_x),
            y: y.clamp(0.0, max_y),
        }
    }

    fn position(&self) -> FramePosition {
        match self.position {
            Some(position) => position,
            None => {
                let (max_x, max_y) = self.max_offset();
                FramePosition {
                    x: max_x / 2.0,
                    y: max_y / 2.0,
                }
            }
        }
    }

    fn rect(&self) -> FrameRect {
        let position = self.position();
        let (width, height) = self.frame.scaled(self.zoom.get());
        FrameRect {
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    fn local(&self, pointer: ScreenPoint) -> (f64, f64) {
        pointer.delta(&self.origin)
    }

    /// Moves the frame if a drag is active. Returns the new position.
    fn drag_to(&mut self, pointer: ScreenPoint) -> Option<FramePosition> {
        let (dx, dy) = match self.drag {
            DragState::Dragging { offset, .. } => offset,
            DragState::Idle => return None,
        };
        let (px, py) = self.local(pointer);
        let position = self.clamp(px - dx, py - dy);
        self.position = Some(position);
        tracing::trace!("Frame dragged to ({:.1}, {:.1})", position.x, position.y);
        Some(position)
    }

    fn end_drag(&mut self) -> bool {
        let was_dragging = matches!(self.drag, DragState::Dragging { .. });
        self.drag = DragState::Idle;
        was_dragging
    }
}

/// The movable viewport frame.
#[derive(Debug)]
pub struct FrameView {
    inner: ThreadSafe<FrameInner>,
}

impl FrameView {
    /// Creates an idle, centred frame.
    pub fn new(frame: CanvasSize, bounds: CanvasSize, zoom: ZoomFactor, label: &str) -> Self {
        Self {
            inner: thread_safe(FrameInner {
                frame,
                bounds,
                zoom,
                origin: ScreenPoint::default(),
                position: None,
                label: label.to_string(),
                drag: DragState::Idle,
            }),
        }
    }

    /// Sets the workspace's top-left corner in screen space.
    pub fn set_origin(&self, origin: ScreenPoint) {
        self.inner.lock().origin = origin;
    }

    pub fn set_label(&self, label: &str) {
        self.inner.lock().label = label.to_string();
    }

    /// Current top-left, clamped.
    pub fn position(&self) -> FramePosition {
        self.inner.lock().position()
    }

    pub fn rect(&self) -> FrameRect {
        self.inner.lock().rect()
    }

    pub fn frame_size(&self) -> CanvasSize {
        self.inner.lock().frame
    }

    pub fn bounds(&self) -> CanvasSize {
        self.inner.lock().bounds
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.inner.lock().drag, DragState::Dragging { .. })
    }

    /// Caption drawn at the frame's top-left, e.g. `Mobile 375×667`.
    pub fn label(&self) -> String {
        let inner = self.inner.lock();
        format!(
            "{} {}×{}",
            inner.label,
            inner.frame.width(),
            inner.frame.height()
        )
    }

    /// Starts a drag if `pointer` is inside the frame.
    ///
    /// While dragging, pointer moves published on `bus` reposition the frame
    /// and a pointer release anywhere ends the drag. Returns true if a drag
    /// started.
    pub fn press(&self, bus: &Arc<EventBus>, pointer: ScreenPoint) -> bool {
        let mut inner = self.inner.lock();
        if matches!(inner.drag, DragState::Dragging { .. }) {
            return false;
        }
        let (px, py) = inner.local(pointer);
        let rect = inner.rect();
        if !rect.contains(px, py) {
            return false;
        }

        let state = Arc::downgrade(&self.inner);
        let bus_ref = Arc::downgrade(bus);
        let subscription = bus.subscribe_scoped(EventFilter::pointer(), move |event| {
            if let AppEvent::Pointer(pointer) = event {
                handle_window_pointer(&state, &bus_ref, pointer.kind, pointer.position);
            }
        });

        inner.position = Some(FramePosition {
            x: rect.x,
            y: rect.y,
        });
        inner.drag = DragState::Dragging {
            offset: (px - rect.x, py - rect.y),
            _subscription: subscription,
        };
        tracing::debug!("Frame drag started at ({:.1}, {:.1})", px, py);
        true
    }

    /// Applies a pointer move. No-op unless dragging.
    pub fn pointer_moved(&self, pointer: ScreenPoint) -> Option<FramePosition> {
        self.inner.lock().drag_to(pointer)
    }

    /// Ends the drag, dropping its pointer listener.
    ///
    /// Returns true if a drag was in progress.
    pub fn release(&self) -> bool {
        let ended = self.inner.lock().end_drag();
        if ended {
            tracing::debug!("Frame drag ended");
        }
        ended
    }

    /// Replaces frame size, bounds and zoom. Any drag ends and the frame is
    /// centred again.
    pub fn resize(&self, frame: CanvasSize, bounds: CanvasSize, zoom: ZoomFactor) {
        let mut inner = self.inner.lock();
        inner.end_drag();
        inner.frame = frame;
        inner.bounds = bounds;
        inner.zoom = zoom;
        inner.position = None;
    }
}

fn handle_window_pointer(
    state: &WeakThreadSafe<FrameInner>,
    bus: &Weak<EventBus>,
    kind: PointerKind,
    position: ScreenPoint,
) {
    let Some(state) = state.upgrade() else {
        return;
    };
    match kind {
        PointerKind::Move => {
            let moved = state.lock().drag_to(position);
            if let (Some(moved), Some(bus)) = (moved, bus.upgrade()) {
                let _ = bus.publish(AppEvent::Overlay(OverlayEvent::FrameMoved {
                    x: moved.x,
                    y: moved.y,
                }));
            }
        }
        PointerKind::Up => {
            if state.lock().end_drag() {
                tracing::debug!("Frame drag ended");
            }
        }
        PointerKind::Down => {}
    }
}

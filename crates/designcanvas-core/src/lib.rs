//! # DesignCanvas Core
//!
//! Core types, errors, and the event bus for DesignCanvas.
//! Provides the geometry primitives every other crate speaks in and the
//! per-session bus that carries pointer input and overlay state changes.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{Axis, CanvasSize, DisplayPoint, DocPoint, ScreenPoint, SurfaceRect};

pub use error::{CanvasError, Error, Result};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, EventBus, EventBusError, EventCategory, EventFilter, OverlayEvent, PointerEvent,
    PointerKind, Subscription, SubscriptionId,
};

pub use types::{thread_safe, ThreadSafe, WeakThreadSafe};

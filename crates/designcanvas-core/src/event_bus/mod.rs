//! # Event Bus Module
//!
//! Decoupled communication between the overlay session and its host.
//!
//! ## Overview
//!
//! - The host feeds window-level pointer events in; drag gestures listen for
//!   them only while a drag is in progress
//! - The session announces overlay state changes (zoom, canvas size, object
//!   count) for status bars and toolbars
//! - Scoped subscriptions unsubscribe on drop, so no handler outlives the
//!   gesture or component that registered it
//!
//! ## Usage
//!
//! ```rust,ignore
//! use designcanvas_core::event_bus::{AppEvent, EventBus, EventFilter, PointerEvent};
//!
//! let bus = EventBus::new();
//! let guard = bus.subscribe_scoped(EventFilter::pointer(), |event| {
//!     println!("{}", event.description());
//! });
//!
//! bus.publish(AppEvent::Pointer(PointerEvent::moved(10.0, 20.0)));
//!
//! // Unsubscribes here
//! drop(guard);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;

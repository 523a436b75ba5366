//! Event Bus implementation.
//!
//! Provides the per-session EventBus and the scoped [`Subscription`] guard
//! used for listeners that must not outlive a gesture or a component.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Only pointer events.
    pub fn pointer() -> Self {
        EventFilter::Categories(vec![EventCategory::Pointer])
    }

    /// Only overlay events.
    pub fn overlay() -> Self {
        EventFilter::Categories(vec![EventCategory::Overlay])
    }

    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

type HandlerMap = HashMap<SubscriptionId, (EventFilter, EventHandler)>;

/// Default broadcast channel capacity
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Error types for event bus operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Event bus owned by one editor session.
///
/// Synchronous handlers run on the publishing thread, in dispatch order.
/// The handler table is snapshotted before dispatch, so a handler may
/// subscribe or unsubscribe (including itself) while running.
pub struct EventBus {
    /// Broadcast channel sender
    sender: broadcast::Sender<AppEvent>,
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HandlerMap>>,
}

impl EventBus {
    /// Create a new event bus with the default channel capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new event bus with a custom broadcast capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of async receivers that will receive the event,
    /// or an error if nobody at all is listening.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        let snapshot: Vec<EventHandler> = {
            let handlers = self.handlers.read();
            handlers
                .values()
                .filter(|(filter, _)| filter.matches(&event))
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };

        for handler in &snapshot {
            handler(&event);
        }

        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) => {
                if snapshot.is_empty() && self.subscriber_count() == 0 {
                    Err(EventBusError::NoSubscribers)
                } else {
                    Ok(0)
                }
            }
        }
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The subscription stays active until [`EventBus::unsubscribe`] is
    /// called with the returned id.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Arc::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Subscribe with a guard that unsubscribes when dropped
    pub fn subscribe_scoped<F>(&self, filter: EventFilter, handler: F) -> Subscription
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = self.subscribe(filter, handler);
        Subscription {
            id,
            handlers: Arc::downgrade(&self.handlers),
        }
    }

    /// Get a receiver for manual event polling
    ///
    /// This is useful for async hosts that want to receive events in a
    /// tokio task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        remove_handler(&self.handlers, id)
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

fn remove_handler(handlers: &RwLock<HandlerMap>, id: SubscriptionId) -> bool {
    let removed = handlers.write().remove(&id).is_some();
    if removed {
        tracing::debug!("Subscription {} removed", id);
    }
    removed
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Scoped subscription guard
///
/// Unsubscribes its handler when dropped. Holds only a weak reference to the
/// bus, so an outstanding guard never keeps a torn-down bus alive.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    id: SubscriptionId,
    handlers: Weak<RwLock<HandlerMap>>,
}

impl Subscription {
    /// The id of the underlying subscription
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the handler is still registered
    pub fn is_active(&self) -> bool {
        self.handlers
            .upgrade()
            .is_some_and(|handlers| handlers.read().contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.upgrade() {
            remove_handler(&handlers, self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{OverlayEvent, PointerEvent};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_event_bus_creation() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);

        // Double unsubscribe should return false
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_event_delivery() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let _id = bus.subscribe(EventFilter::All, move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(AppEvent::Pointer(PointerEvent::moved(1.0, 1.0)))
            .expect("Should publish");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_filtering() {
        let bus = EventBus::new();
        let pointer_count = Arc::new(AtomicUsize::new(0));
        let overlay_count = Arc::new(AtomicUsize::new(0));

        let pc = pointer_count.clone();
        bus.subscribe(EventFilter::pointer(), move |_| {
            pc.fetch_add(1, Ordering::SeqCst);
        });

        let oc = overlay_count.clone();
        bus.subscribe(EventFilter::overlay(), move |_| {
            oc.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(AppEvent::Pointer(PointerEvent::down(0.0, 0.0)))
            .ok();
        bus.publish(AppEvent::Pointer(PointerEvent::up(0.0, 0.0))).ok();
        bus.publish(AppEvent::Overlay(OverlayEvent::GridToggled { visible: false }))
            .ok();

        assert_eq!(pointer_count.load(Ordering::SeqCst), 2);
        assert_eq!(overlay_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_without_listeners() {
        let bus = EventBus::new();
        let result = bus.publish(AppEvent::Overlay(OverlayEvent::ObjectsChanged { count: 0 }));
        assert!(matches!(result, Err(EventBusError::NoSubscribers)));
    }

    #[test]
    fn test_scoped_subscription_drops() {
        let bus = EventBus::new();
        let guard = bus.subscribe_scoped(EventFilter::All, |_| {});
        assert!(guard.is_active());
        assert_eq!(bus.subscriber_count(), 1);

        drop(guard);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_guard_outlives_bus() {
        let bus = EventBus::new();
        let guard = bus.subscribe_scoped(EventFilter::All, |_| {});
        drop(bus);
        assert!(!guard.is_active());
        drop(guard);
    }

    #[test]
    fn test_handler_can_drop_its_own_subscription() {
        let bus = Arc::new(EventBus::new());
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let calls = Arc::new(AtomicUsize::new(0));

        let slot_clone = slot.clone();
        let calls_clone = calls.clone();
        let guard = bus.subscribe_scoped(EventFilter::pointer(), move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            let taken = slot_clone.lock().take();
            drop(taken);
        });
        *slot.lock() = Some(guard);

        bus.publish(AppEvent::Pointer(PointerEvent::up(0.0, 0.0))).ok();
        bus.publish(AppEvent::Pointer(PointerEvent::up(0.0, 0.0))).ok();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_async_receiver() {
        let bus = EventBus::new();
        let mut receiver = bus.receiver();

        let event = AppEvent::Overlay(OverlayEvent::ZoomChanged { zoom: 2.0 });
        bus.publish(event.clone()).ok();

        let received = receiver.try_recv();
        assert_eq!(received.ok(), Some(event));
    }
}

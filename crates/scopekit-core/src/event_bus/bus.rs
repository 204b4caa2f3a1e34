//! Event Bus implementation.
//!
//! Provides the [`EventBus`] struct used for calibration change
//! distribution. Synchronous handlers run on the publishing thread;
//! async consumers poll a broadcast receiver.

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
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
    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(AppEvent) + Send + Sync>;

/// Error types for event bus operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
    /// Channel is closed
    #[error("Event channel is closed")]
    ChannelClosed,
    /// A handler attempted to publish an event of the category it is
    /// currently handling
    #[error("Re-entrant publish of {0} event rejected")]
    ReentrantPublish(EventCategory),
}

const CHANNEL_CAPACITY: usize = 256;

/// Event bus for calibration change distribution
///
/// Handlers run synchronously on the publishing thread, so they should
/// return quickly. A handler that needs to write calibration state back must
/// do so outside the handler invocation: a publish issued while an event of
/// the same category is being dispatched returns
/// [`EventBusError::ReentrantPublish`] instead of looping.
pub struct EventBus {
    /// Broadcast channel sender
    sender: broadcast::Sender<AppEvent>,
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>>,
    /// Categories currently being dispatched
    in_flight: Arc<Mutex<HashSet<EventCategory>>>,
}

/// Removes the category from the in-flight set when dispatch ends, on every
/// exit path.
struct DispatchGuard<'a> {
    in_flight: &'a Mutex<HashSet<EventCategory>>,
    category: EventCategory,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.category);
    }
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            handlers: Arc::new(RwLock::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of broadcast receivers that will receive the
    /// event, or an error if there are no subscribers, the channel is
    /// closed, or the publish is re-entrant for its category.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        let category = event.category();
        if !self.in_flight.lock().insert(category) {
            tracing::warn!(%category, "re-entrant publish rejected");
            return Err(EventBusError::ReentrantPublish(category));
        }
        let _guard = DispatchGuard {
            in_flight: &self.in_flight,
            category,
        };

        tracing::debug!("publish: {}", event.description());

        // Call synchronous handlers. Recursive read: a handler may publish a
        // different-category event, re-entering dispatch on this thread.
        let handlers = self.handlers.read_recursive();
        for (_, (filter, handler)) in handlers.iter() {
            if filter.matches(&event) {
                handler(event.clone());
            }
        }

        // Send via broadcast channel for async receivers
        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) => {
                // No receivers, but handlers may have been called
                if handlers.is_empty() {
                    Err(EventBusError::NoSubscribers)
                } else {
                    Ok(0)
                }
            }
        }
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler will be called on the publishing thread, so it should
    /// return quickly to avoid blocking event dispatch.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Get a receiver for manual event polling
    ///
    /// Useful for async contexts where events are consumed in a task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let removed = handlers.remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
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

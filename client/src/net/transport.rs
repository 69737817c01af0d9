//! Connection contract shared by the session manager and the synchronizer.
//!
//! DESIGN
//! ======
//! The chat server is reached through one process-wide connection created by
//! the root component and injected through Leptos context as a
//! [`ChatConnection`]. Consumers only see `emit` and `subscribe`; every
//! subscription returns a [`Subscription`] handle that removes the handler
//! when it is released, so components can tear down on unmount.
//!
//! The registry sits behind `Arc<Mutex<_>>` because Leptos context values and
//! cleanup closures must be `Send + Sync`. The browser runs one thread, so the
//! lock is never contended. Handlers run after the lock is released, which
//! lets a handler subscribe or unsubscribe without deadlocking.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::types::{EventKind, InboundEvent, OutboundEvent};

/// Callback invoked for each inbound event of the subscribed kind.
pub type Handler = Arc<dyn Fn(&InboundEvent) + Send + Sync>;

/// Outbound + inbound capability of a connection to the chat server.
pub trait Transport: Send + Sync {
    /// Queue an event for the server.
    ///
    /// Returns `false` if the connection can no longer accept events.
    fn emit(&self, event: &OutboundEvent) -> bool;

    /// Register `handler` for inbound events of `kind`.
    fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription;
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, EventKind, Handler)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Fan-out of inbound events to subscribed handlers, in subscription order.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    /// Register a handler; it stays active until the returned handle is released.
    pub fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription {
        let mut registry = lock(&self.registry);
        registry.next_id += 1;
        let id = registry.next_id;
        registry.handlers.push((id, kind, handler));
        Subscription { registry: Arc::downgrade(&self.registry), id }
    }

    /// Deliver `event` to every handler subscribed to its kind.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &InboundEvent) -> usize {
        let kind = event.kind();
        let targets = lock(&self.registry)
            .handlers
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, handler)| Arc::clone(handler))
            .collect::<Vec<_>>();
        for handler in &targets {
            handler(event);
        }
        targets.len()
    }

    /// Number of live subscriptions across all kinds.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Handle to one registered handler.
///
/// Dropping the handle unsubscribes; [`Subscription::unsubscribe`] makes the
/// teardown explicit at call sites.
#[must_use = "dropping a Subscription unsubscribes its handler immediately"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(id, _, _)| *id != self.id);
        }
    }
}

/// Transport with no server behind it.
///
/// Used during server-side rendering, where there is no browser socket.
/// Emits are refused; subscriptions still work so components mount the same
/// way on both sides.
#[derive(Clone, Default)]
pub struct OfflineTransport {
    bus: EventBus,
}

impl Transport for OfflineTransport {
    fn emit(&self, _event: &OutboundEvent) -> bool {
        false
    }

    fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription {
        self.bus.subscribe(kind, handler)
    }
}

/// Injected, cheaply clonable handle to the process-wide connection.
#[derive(Clone)]
pub struct ChatConnection {
    transport: Arc<dyn Transport>,
}

impl ChatConnection {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self { transport: Arc::new(transport) }
    }

    /// Connection that never reaches a server.
    pub fn offline() -> Self {
        Self::new(OfflineTransport::default())
    }

    pub fn emit(&self, event: &OutboundEvent) -> bool {
        self.transport.emit(event)
    }

    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: Fn(&InboundEvent) + Send + Sync + 'static,
    {
        self.transport.subscribe(kind, Arc::new(handler))
    }
}

/// Transport that records emitted events and lets tests inject inbound ones.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordingTransport {
    pub(crate) bus: EventBus,
    sent: Arc<Mutex<Vec<OutboundEvent>>>,
}

#[cfg(test)]
impl RecordingTransport {
    pub(crate) fn sent(&self) -> Vec<OutboundEvent> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[cfg(test)]
impl Transport for RecordingTransport {
    fn emit(&self, event: &OutboundEvent) -> bool {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        true
    }

    fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription {
        self.bus.subscribe(kind, handler)
    }
}

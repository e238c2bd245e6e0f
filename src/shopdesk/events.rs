//! # Cross-Component Event Bus
//!
//! Process-wide pub/sub used to tell sibling components that shared state
//! changed (company record saved, per-route search updated) without a shared
//! state container between them.
//!
//! Semantics:
//! - In-memory only, fire-and-forget, no queueing, no retry.
//! - Handlers subscribed to the topic at publish time are invoked
//!   synchronously, in registration order, once each.
//! - A publish with no subscribers is a no-op.
//! - A handler that subscribes during delivery does not receive the
//!   in-flight event.
//!
//! Payloads are a closed, typed set ([`AppEvent`]) rather than free-form
//! dynamic objects, so a publisher cannot emit a shape no subscriber expects.

use std::sync::{Arc, Mutex};

use crate::settings::CompanyData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    CompanyUpdated,
    SearchUpdated,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    CompanyUpdated(CompanyData),
    /// Carries the originating route so only the matching page reacts.
    SearchUpdated {
        route: String,
        term: String,
        filters: Vec<String>,
    },
}

impl AppEvent {
    pub fn topic(&self) -> Topic {
        match self {
            AppEvent::CompanyUpdated(_) => Topic::CompanyUpdated,
            AppEvent::SearchUpdated { .. } => Topic::SearchUpdated,
        }
    }
}

type Handler = Arc<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscriber {
    id: u64,
    topic: Topic,
    handler: Handler,
}

/// Handle returned by [`EventBus::subscribe`]; pass back to
/// [`EventBus::unsubscribe`] to stop delivery.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

#[derive(Default)]
pub struct EventBus {
    registry: Mutex<Registry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&AppEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = match self.registry.lock() {
            Ok(guard) => guard,
            // A poisoned registry means a handler panicked; the subscription
            // is returned but will never fire again this process.
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.next_id += 1;
        let id = registry.next_id;
        registry.subscribers.push(Subscriber {
            id,
            topic,
            handler: Arc::new(handler),
        });
        Subscription { id }
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut registry = match self.registry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.subscribers.retain(|s| s.id != subscription.id);
    }

    /// Deliver `event` to every handler subscribed to its topic right now.
    ///
    /// The subscriber list is snapshotted before delivery, so handlers may
    /// publish or subscribe re-entrantly without deadlocking.
    pub fn publish(&self, event: &AppEvent) {
        let topic = event.topic();
        let handlers: Vec<Handler> = {
            let registry = match self.registry.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            registry
                .subscribers
                .iter()
                .filter(|s| s.topic == topic)
                .map(|s| Arc::clone(&s.handler))
                .collect()
        };

        for handler in handlers {
            handler(event);
        }
    }
}

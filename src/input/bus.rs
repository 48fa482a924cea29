use crate::{
    input::events::MapEvent,
    prelude::HashMap,
    traits::{EventBus, EventCallback},
};
use std::sync::{Arc, RwLock};

/// Synchronous in-process event bus
///
/// `publish` calls the subscribers of the event's type immediately, in the
/// order they subscribed. Callbacks may publish or subscribe themselves; a
/// callback added during a dispatch is first called on the next publish.
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event type
    listeners: RwLock<HashMap<String, Vec<EventCallback>>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for `subscribe` taking a plain closure
    pub fn on<F>(&self, event_type: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.subscribe(event_type, Arc::new(callback));
    }

    /// Number of listeners registered for an event type
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .read()
            .map(|listeners| listeners.get(event_type).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl EventBus for EventManager {
    fn publish(&self, event: &MapEvent) {
        // snapshot so callbacks can touch the bus without deadlocking
        let callbacks: Vec<EventCallback> = match self.listeners.read() {
            Ok(listeners) => listeners
                .get(event.event_type())
                .cloned()
                .unwrap_or_default(),
            Err(_) => {
                log::error!("event listeners poisoned, dropping {}", event.event_type());
                return;
            }
        };

        for callback in callbacks {
            callback(event);
        }
    }

    fn subscribe(&self, event_type: &str, callback: EventCallback) {
        match self.listeners.write() {
            Ok(mut listeners) => listeners
                .entry(event_type.to_string())
                .or_default()
                .push(callback),
            Err(_) => log::error!("event listeners poisoned, cannot subscribe to {}", event_type),
        }
    }
}

//! Event bus seam for lifecycle notifications.
//!
//! The runtime only ever talks to `dyn EventBus`, so a UI shell, the replay
//! tool and tests can each plug in their own sink.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// Sink for lifecycle events.
pub trait EventBus: Send + Sync {
    /// Emit an event with a JSON payload.
    ///
    /// # Arguments
    /// * `topic` - Event name, one of [`crate::event_names`]
    /// * `payload` - JSON payload to emit
    fn emit(&self, topic: &str, payload: serde_json::Value);
}

/// Shared event bus reference.
pub type EventBusRef = Arc<dyn EventBus>;

/// Serialize `event` and emit it on `topic`.
///
/// A payload that fails to serialize is logged and dropped; event delivery
/// never interrupts frame processing.
pub fn publish<T: Serialize>(bus: &dyn EventBus, topic: &str, event: &T) {
    match serde_json::to_value(event) {
        Ok(payload) => bus.emit(topic, payload),
        Err(err) => tracing::warn!(topic, error = %err, "dropping unserializable event"),
    }
}

/// A captured event from [`InMemoryEventBus`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedEvent {
    pub topic: String,
    pub payload: serde_json::Value,
}

/// Records every emitted event in order. Used by tests and the replay summary.
#[derive(Default)]
pub struct InMemoryEventBus {
    events: Mutex<Vec<EmittedEvent>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<EmittedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All captured events, oldest first.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.guard().clone()
    }

    /// Captured events for a single topic.
    pub fn events_for(&self, topic: &str) -> Vec<EmittedEvent> {
        self.guard()
            .iter()
            .filter(|e| e.topic == topic)
            .cloned()
            .collect()
    }

    /// Topic names in emission order.
    pub fn topics(&self) -> Vec<String> {
        self.guard().iter().map(|e| e.topic.clone()).collect()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl EventBus for InMemoryEventBus {
    fn emit(&self, topic: &str, payload: serde_json::Value) {
        self.guard().push(EmittedEvent {
            topic: topic.to_string(),
            payload,
        });
    }
}

/// Discards everything.
pub struct NullEventBus;

impl EventBus for NullEventBus {
    fn emit(&self, _topic: &str, _payload: serde_json::Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_memory_bus_filters_by_topic() {
        let bus = InMemoryEventBus::new();

        bus.emit("jutsu:triggered", json!({"kind": "chidori"}));
        bus.emit("jutsu:expired", json!({"kind": "chidori"}));
        bus.emit("jutsu:triggered", json!({"kind": "rasengan"}));

        assert_eq!(bus.len(), 3);
        assert_eq!(bus.events_for("jutsu:triggered").len(), 2);
        assert_eq!(bus.events_for("session:started").len(), 0);
        assert_eq!(
            bus.topics(),
            ["jutsu:triggered", "jutsu:expired", "jutsu:triggered"]
        );
    }

    #[test]
    fn test_in_memory_bus_clear() {
        let bus = InMemoryEventBus::new();
        bus.emit("session:started", json!({}));
        assert!(!bus.is_empty());

        bus.clear();
        assert!(bus.is_empty());
    }

    #[test]
    fn test_publish_serializes_payload() {
        #[derive(Serialize)]
        struct Ping {
            at_ms: u64,
        }

        let bus = InMemoryEventBus::new();
        publish(&bus, "test:ping", &Ping { at_ms: 42 });

        let events = bus.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload, json!({"at_ms": 42}));
    }

    #[test]
    fn test_null_bus_accepts_anything() {
        let bus = NullEventBus;
        bus.emit("session:stopped", json!({"ignored": true}));
        publish(&bus, "session:stopped", &json!([1, 2, 3]));
    }
}

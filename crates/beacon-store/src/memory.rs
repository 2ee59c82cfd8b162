use std::sync::RwLock;

use async_trait::async_trait;
use beacon_types::Event;

use crate::error::StoreResult;
use crate::traits::EventStore;

/// In-memory, `Vec`-based event store.
///
/// Intended for tests and embedding. Events are kept in arrival order behind
/// a `RwLock` for safe concurrent access.
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all stored events, in arrival order.
    pub fn events(&self) -> Vec<Event> {
        self.events.read().expect("lock poisoned").clone()
    }

    /// Number of events currently stored.
    pub fn len(&self) -> usize {
        self.events.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.events.read().expect("lock poisoned").is_empty()
    }

    /// Remove all events from the store.
    pub fn clear(&self) {
        self.events.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn log_it(&self, event: Event) -> StoreResult<()> {
        self.events.write().expect("lock poisoned").push(event);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryEventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventStore")
            .field("event_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn make_event(action: &str) -> Event {
        Event {
            site: "site1".into(),
            category: "nav".into(),
            action: action.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryEventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn keeps_arrival_order() {
        let store = InMemoryEventStore::new();
        store.log_it(make_event("a")).await.unwrap();
        store.log_it(make_event("b")).await.unwrap();
        let actions: Vec<String> = store.events().into_iter().map(|e| e.action).collect();
        assert_eq!(actions, ["a", "b"]);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemoryEventStore::new();
        store.log_it(make_event("a")).await.unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn concurrent_writers() {
        let store = Arc::new(InMemoryEventStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.log_it(make_event(&format!("a{i}"))).await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }
        assert_eq!(store.len(), 32);
    }

    #[tokio::test]
    async fn usable_through_arc_dyn() {
        let store = Arc::new(InMemoryEventStore::new());
        let dyn_store: Arc<dyn EventStore> = store.clone();
        dyn_store.log_it(make_event("x")).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn debug_shows_count() {
        let store = InMemoryEventStore::new();
        assert_eq!(format!("{store:?}"), "InMemoryEventStore { event_count: 0 }");
    }
}

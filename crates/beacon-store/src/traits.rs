use std::sync::Arc;

use async_trait::async_trait;
use beacon_types::Event;

use crate::error::StoreResult;

/// Somewhere to put collected events.
///
/// All implementations must satisfy these invariants:
/// - `log_it` is safe to call concurrently from many uncoordinated tasks.
///   The collector never serializes calls on the store's behalf.
/// - The store takes ownership of each event; callers keep no copy.
/// - A returned error means the event was not stored. Callers may drop it.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Record one event.
    async fn log_it(&self, event: Event) -> StoreResult<()>;
}

#[async_trait]
impl<S: EventStore + ?Sized> EventStore for Arc<S> {
    async fn log_it(&self, event: Event) -> StoreResult<()> {
        (**self).log_it(event).await
    }
}

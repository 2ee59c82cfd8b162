use async_trait::async_trait;
use beacon_types::Event;

use crate::error::StoreResult;
use crate::traits::EventStore;

/// `tracing` target every stored event is emitted on.
pub const EVENT_LOG_TARGET: &str = "beacon::events";

/// Store that writes each event as a JSON-encoded `tracing` record.
///
/// Where the records end up is decided by whatever subscriber the process
/// installs. Nothing is retained in memory.
#[derive(Clone, Debug, Default)]
pub struct LogEventStore;

impl LogEventStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventStore for LogEventStore {
    async fn log_it(&self, event: Event) -> StoreResult<()> {
        let json = serde_json::to_string(&event)?;
        tracing::info!(target: EVENT_LOG_TARGET, site = %event.site, event = %json, "event collected");
        Ok(())
    }
}

use std::sync::Arc;

use axum::http::StatusCode;
use beacon_gate::Validator;
use beacon_store::EventStore;
use beacon_types::{build_event, Event, ParameterSet};

/// How a background submission ended. Only ever observed in logs and tests;
/// the HTTP response has already been sent by the time this is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    Stored,
    Failed,
}

/// Receives tracking hits and records them in the given store.
///
/// Each accepted hit is handed to the store on a detached task. Nothing
/// joins, cancels, or bounds those tasks: a slow store lets submissions pile
/// up without limit, and a failing store loses events silently (apart from
/// an error log).
pub struct Collector {
    store: Arc<dyn EventStore>,
    validator: Validator,
}

impl Collector {
    /// A collector using the measurement-protocol rule set.
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self::with_validator(store, Validator::measurement_protocol())
    }

    pub fn with_validator(store: Arc<dyn EventStore>, validator: Validator) -> Self {
        Self { store, validator }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Handle one hit given its raw query string.
    ///
    /// Returns `400 Bad Request` if the query fails validation; the storage
    /// is not touched in that case. Otherwise the event is dispatched in the
    /// background and `200 OK` is returned without waiting for the store.
    ///
    /// Query decoding is lenient (see [`ParameterSet::from_query`]), so the
    /// decode-error branch only guards against a stricter decoder.
    pub fn handle(&self, query: Option<&str>) -> StatusCode {
        let params = match ParameterSet::from_query(query.unwrap_or_default()) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!(error = %e, "rejected hit");
                return StatusCode::BAD_REQUEST;
            }
        };
        self.handle_params(&params)
    }

    /// Same as [`Self::handle`] for already-decoded parameters.
    pub fn handle_params(&self, params: &ParameterSet) -> StatusCode {
        if let Err(e) = self.validator.validate(params) {
            tracing::warn!(violations = e.len(), "rejected hit: {e}");
            return StatusCode::BAD_REQUEST;
        }
        self.dispatch(build_event(params));
        StatusCode::OK
    }

    /// Submit `event` to the store on a detached task.
    ///
    /// Outside a tokio runtime there is nowhere to run the task; the event is
    /// dropped and an error is logged.
    pub fn dispatch(&self, event: Event) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!(event = %event, error = %e, "no runtime to store event, dropped");
                return;
            }
        };
        let store = Arc::clone(&self.store);
        runtime.spawn(async move {
            record_to(store.as_ref(), event).await;
        });
    }

    /// Submit `event` to the store and wait for the outcome.
    pub async fn record(&self, event: Event) -> RecordOutcome {
        record_to(self.store.as_ref(), event).await
    }
}

impl std::fmt::Debug for Collector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collector")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

async fn record_to(store: &dyn EventStore, event: Event) -> RecordOutcome {
    let summary = event.to_string();
    match store.log_it(event).await {
        Ok(()) => {
            tracing::debug!(event = %summary, "event stored");
            RecordOutcome::Stored
        }
        Err(e) => {
            tracing::error!(event = %summary, error = %e, "failed to store event");
            RecordOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beacon_store::{InMemoryEventStore, StoreError, StoreResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Store that rejects every event and counts the attempts.
    #[derive(Default)]
    struct FailingStore {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl EventStore for FailingStore {
        async fn log_it(&self, _event: Event) -> StoreResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Unavailable("down for maintenance".into()))
        }
    }

    fn sample_event() -> Event {
        Event {
            site: "site1".into(),
            category: "nav".into(),
            action: "click".into(),
            ..Default::default()
        }
    }

    async fn wait_for_len(store: &InMemoryEventStore, n: usize) {
        for _ in 0..200 {
            if store.len() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("store never reached {n} events (has {})", store.len());
    }

    #[tokio::test]
    async fn valid_hit_is_stored() {
        let store = Arc::new(InMemoryEventStore::new());
        let collector = Collector::new(store.clone());

        let status = collector.handle(Some("v=1&tid=site1&t=event&ec=nav&ea=click"));
        assert_eq!(status, StatusCode::OK);

        wait_for_len(&store, 1).await;
        assert_eq!(store.events(), vec![sample_event()]);
    }

    #[tokio::test]
    async fn invalid_hit_is_rejected() {
        let store = Arc::new(InMemoryEventStore::new());
        let collector = Collector::new(store.clone());

        let status = collector.handle(Some("v=1&tid=site1&t=event&ea=click"));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn missing_query_is_rejected() {
        let store = Arc::new(InMemoryEventStore::new());
        let collector = Collector::new(store.clone());
        assert_eq!(collector.handle(None), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn store_failure_still_returns_ok() {
        let store = Arc::new(FailingStore::default());
        let collector = Collector::new(store.clone());
        let status = collector.handle(Some("v=1&tid=site1&t=event&ec=nav&ea=click"));
        assert_eq!(status, StatusCode::OK);

        // The background submission runs and fails without affecting the response.
        for _ in 0..200 {
            if store.attempts.load(Ordering::SeqCst) == 1 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("background submission never reached the store");
    }

    #[tokio::test]
    async fn record_reports_outcome() {
        let ok = Collector::new(Arc::new(InMemoryEventStore::new()));
        assert_eq!(ok.record(sample_event()).await, RecordOutcome::Stored);

        let failing = Collector::new(Arc::new(FailingStore::default()));
        assert_eq!(failing.record(sample_event()).await, RecordOutcome::Failed);
    }

    #[test]
    fn dispatch_without_runtime_drops_event() {
        let store = Arc::new(InMemoryEventStore::new());
        let collector = Collector::new(store.clone());
        let status = collector.handle(Some("v=1&tid=site1&t=event&ec=nav&ea=click"));
        assert_eq!(status, StatusCode::OK);
        assert!(store.is_empty());
    }

    #[test]
    fn default_validator_is_measurement_protocol() {
        let collector = Collector::new(Arc::new(InMemoryEventStore::new()));
        assert_eq!(collector.validator().rule_count(), 5);
    }

    #[tokio::test]
    async fn custom_validator_is_used() {
        let store = Arc::new(InMemoryEventStore::new());
        let collector = Collector::with_validator(store.clone(), Validator::empty());
        assert_eq!(collector.handle(Some("tid=anything")), StatusCode::OK);
        wait_for_len(&store, 1).await;
        assert_eq!(store.events()[0].site, "anything");
    }
}

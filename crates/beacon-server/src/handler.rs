use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use crate::collector::Collector;

/// Collection handler. The body is always empty; rejection details only go
/// to the log.
pub async fn collect_handler(
    State(collector): State<Arc<Collector>>,
    RawQuery(query): RawQuery,
) -> StatusCode {
    collector.handle(query.as_deref())
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "beacon-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::collector::Collector;
use crate::handler;

pub const HEALTH_PATH: &str = "/health";

/// Build the axum router: the collection endpoint on `collect_path` (GET or
/// POST, parameters read from the query string) plus the health check.
pub fn build_router(collector: Arc<Collector>, collect_path: &str) -> Router {
    Router::new()
        .route(
            collect_path,
            get(handler::collect_handler).post(handler::collect_handler),
        )
        .route(HEALTH_PATH, get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(collector)
}

use std::sync::Arc;

use beacon_store::EventStore;
use tokio::net::TcpListener;

use crate::collector::Collector;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Beacon collection server.
pub struct BeaconServer {
    config: ServerConfig,
    collector: Arc<Collector>,
}

impl BeaconServer {
    pub fn new(config: ServerConfig, store: Arc<dyn EventStore>) -> Self {
        Self {
            config,
            collector: Arc::new(Collector::new(store)),
        }
    }

    /// Build a server whose store is chosen by `config.store`.
    pub fn from_config(config: ServerConfig) -> Self {
        let store = config.store.build();
        Self::new(config, store)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn collector(&self) -> &Arc<Collector> {
        &self.collector
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.collector), &self.config.collect_path)
    }

    /// Start serving requests until ctrl-c.
    pub async fn serve(self) -> ServerResult<()> {
        self.config.validate()?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            store = %self.config.store,
            "beacon listening on {}{}",
            self.config.bind_addr,
            self.config.collect_path
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

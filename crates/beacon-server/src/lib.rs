//! HTTP collection endpoint for beacon.
//!
//! Accepts measurement-protocol style hits as query parameters, validates
//! them, and hands accepted events to a pluggable [`beacon_store::EventStore`]
//! without making the client wait for storage.

pub mod collector;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use collector::{Collector, RecordOutcome};
pub use config::{ServerConfig, StoreBackend};
pub use error::{ServerError, ServerResult};
pub use server::BeaconServer;

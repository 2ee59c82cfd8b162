//! Storage capability for beacon.
//!
//! The collector hands every accepted event to an [`EventStore`]. The store
//! is the only state shared between request tasks, so implementations must
//! tolerate concurrent callers.
//!
//! # Storage Backends
//!
//! - [`InMemoryEventStore`] -- `Vec`-backed store for tests and embedding
//! - [`LogEventStore`] -- emits each event as a structured `tracing` record

pub mod error;
pub mod logging;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use logging::{LogEventStore, EVENT_LOG_TARGET};
pub use memory::InMemoryEventStore;
pub use traits::EventStore;

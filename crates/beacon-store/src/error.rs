/// Errors from event store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend cannot accept events right now.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The event could not be encoded for the backend.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

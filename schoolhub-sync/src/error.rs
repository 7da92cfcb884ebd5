//! Error types for the notifier layer.
//!
//! Nothing here is fatal to the page: data-source failures degrade to an
//! empty collection, malformed events are dropped at the boundary, and a
//! missing broadcast channel selects the fallback transport.

use thiserror::Error;

/// Result type for notifier operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in notifier operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The external data provider failed to resolve a collection.
    #[error("data source unavailable: {0}")]
    DataUnavailable(String),

    /// The primary broadcast transport cannot be constructed in this
    /// context.
    #[error("broadcast channel unavailable: {0}")]
    ChannelUnavailable(String),

    /// A received wire frame failed to decode into a change event.
    #[error("malformed change event: {0}")]
    MalformedEvent(#[from] schoolhub_types::Error),

    /// An event's embedded record payload failed to parse.
    #[error("malformed record payload: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

//! Core type definitions for the SchoolHub directory.
//!
//! This crate defines the fundamental, page-agnostic types shared by the
//! directory core:
//! - Record and browsing-context identifiers (UUID v7)
//! - Event stamps (wall time plus a logical counter)
//! - Change events broadcast between browsing contexts
//!
//! Everything page-specific (record shapes, filtering, the collection a page
//! owns) lives in `schoolhub-model`; transports and the notifier live in
//! `schoolhub-sync`.

mod event;
mod ids;
mod stamp;

pub use event::{ChangeEvent, ChangePayload, EventId};
pub use ids::{ContextId, RecordId};
pub use stamp::EventStamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid identifier: {0}")]
    InvalidId(#[from] uuid::Error),
}

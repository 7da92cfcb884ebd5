//! Change events broadcast between browsing contexts.
//!
//! When one context mutates the directory (an admin creates, edits, or
//! deletes a record), it publishes a [`ChangeEvent`] so every other open
//! context can update its own in-memory collection without a reload or a
//! server round trip.
//!
//! Events exist only on the wire of the notification channel; they are never
//! stored. Record payloads travel as JSON strings so this crate stays
//! independent of the record shape defined in `schoolhub-model`.

use crate::{ContextId, EventStamp, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new event ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The payload of a change event.
///
/// `Added` and `Updated` carry the full record as JSON; `Deleted` carries
/// nothing beyond the event's record ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ChangePayload {
    /// A record was created in the originating context.
    Added {
        /// Full JSON representation of the record.
        json_record: String,
    },

    /// A record was edited in place.
    Updated {
        /// Full JSON representation of the updated record.
        json_record: String,
    },

    /// A record was removed.
    Deleted,
}

/// A change to the directory, as seen by other browsing contexts.
///
/// Immutable once created. The `origin` context never receives its own
/// events; the `stamp` makes a republished event byte-distinct so the
/// value-change-driven fallback transport will deliver it again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Unique identifier for this event.
    pub id: EventId,

    /// The record this event applies to.
    pub record_id: RecordId,

    /// The browsing context that performed the mutation.
    pub origin: ContextId,

    /// When this event was created.
    pub stamp: EventStamp,

    /// The change itself.
    pub payload: ChangePayload,
}

impl ChangeEvent {
    /// Creates a new event.
    #[must_use]
    pub fn new(
        record_id: RecordId,
        origin: ContextId,
        stamp: EventStamp,
        payload: ChangePayload,
    ) -> Self {
        Self {
            id: EventId::new(),
            record_id,
            origin,
            stamp,
            payload,
        }
    }

    /// Creates a record-added event.
    #[must_use]
    pub fn added(record_id: RecordId, origin: ContextId, json_record: impl Into<String>) -> Self {
        Self::new(
            record_id,
            origin,
            EventStamp::now(),
            ChangePayload::Added {
                json_record: json_record.into(),
            },
        )
    }

    /// Creates a record-updated event.
    #[must_use]
    pub fn updated(record_id: RecordId, origin: ContextId, json_record: impl Into<String>) -> Self {
        Self::new(
            record_id,
            origin,
            EventStamp::now(),
            ChangePayload::Updated {
                json_record: json_record.into(),
            },
        )
    }

    /// Creates a record-deleted event.
    #[must_use]
    pub fn deleted(record_id: RecordId, origin: ContextId) -> Self {
        Self::new(record_id, origin, EventStamp::now(), ChangePayload::Deleted)
    }

    /// The same logical event with a strictly greater stamp.
    ///
    /// Use this to republish through a transport that suppresses
    /// byte-identical payloads.
    #[must_use]
    pub fn restamped(&self) -> Self {
        Self {
            stamp: self.stamp.tick(),
            ..self.clone()
        }
    }

    /// Encodes the event as a JSON wire frame.
    pub fn encode(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes an event from a JSON wire frame.
    pub fn decode(frame: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(frame)?)
    }
}

//! Event stamps: wall time plus a logical counter.
//!
//! The fallback notification transport only fires on actual value changes,
//! so two byte-identical frames are delivered at most once. Re-stamping an
//! event makes it byte-distinct without touching its meaning, which is why
//! `tick` must produce a strictly greater stamp even within the same
//! millisecond.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// When a change event was created.
///
/// Consists of:
/// - `millis`: milliseconds since Unix epoch
/// - `counter`: disambiguates stamps taken within the same millisecond
///
/// Stamps are totally ordered: by wall time first, counter second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventStamp {
    /// Milliseconds since Unix epoch.
    millis: u64,
    /// Counter for stamps taken at the same wall time.
    counter: u32,
}

impl EventStamp {
    /// Creates a stamp at the current time.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_millis() as u64;

        Self { millis, counter: 0 }
    }

    /// Creates a stamp from components.
    #[must_use]
    pub const fn new(millis: u64, counter: u32) -> Self {
        Self { millis, counter }
    }

    /// Returns the wall-time component.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.millis
    }

    /// Returns the logical counter.
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    /// Produces a strictly greater stamp.
    ///
    /// Advances to the current wall time when it has moved on; otherwise
    /// bumps the counter so a republished event never serializes to the
    /// same bytes as its predecessor.
    #[must_use]
    pub fn tick(&self) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_millis() as u64;

        if now > self.millis {
            Self {
                millis: now,
                counter: 0,
            }
        } else {
            Self {
                millis: self.millis,
                counter: self.counter.saturating_add(1),
            }
        }
    }
}

impl Default for EventStamp {
    fn default() -> Self {
        Self::now()
    }
}

impl PartialOrd for EventStamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventStamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.millis.cmp(&other.millis) {
            Ordering::Equal => self.counter.cmp(&other.counter),
            other => other,
        }
    }
}

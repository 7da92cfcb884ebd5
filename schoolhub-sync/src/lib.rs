//! Cross-tab change notifier and page controller for SchoolHub.
//!
//! Keeps every open same-origin browsing context's record collection
//! consistent without a page reload or server round trip.
//!
//! # Architecture
//!
//! - **Transport**: abstracts over the two delivery mechanisms — the
//!   broadcast channel shared by same-origin contexts, and the key-value
//!   store whose change notifications serve as the fallback.
//! - **Notifier**: one context's publish/subscribe endpoint; picks the
//!   transport at initialization and keeps it for the context's lifetime.
//! - **Applicator**: folds received change events into the local
//!   [`Directory`](schoolhub_model::Directory), deduplicating re-deliveries.
//! - **Controller**: owns the collection, criteria, and notifier for one
//!   page, re-running the filter engine whenever either side changes.
//!
//! # Flow
//!
//! 1. A [`RecordSource`] resolves the initial collection.
//! 2. User input updates [`FilterCriteria`](schoolhub_model::FilterCriteria);
//!    the controller derives the visible subset.
//! 3. Admin mutations are applied locally and published as
//!    [`ChangeEvent`](schoolhub_types::ChangeEvent)s.
//! 4. Other contexts pump their notifiers, apply the events, and refresh
//!    their own views.

mod applicator;
mod channel;
mod controller;
mod error;
mod notifier;
mod source;
mod store;
mod transport;

pub use applicator::apply_change;
pub use channel::{ChannelBus, TabChannel};
pub use controller::{LoadState, PageController};
pub use error::{SyncError, SyncResult};
pub use notifier::{ChannelState, Notifier};
pub use source::{seed_records, RecordSource, SeedSource};
pub use store::{SharedStore, StoreChange, StoreTransport, CHANGE_KEY};
pub use transport::{Transport, TransportKind};

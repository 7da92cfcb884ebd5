//! Fallback transport: shared key-value store change events.
//!
//! Models same-origin persistent storage plus its change notifications.
//! Writing a key notifies every *other* watching context, and only when the
//! stored value actually changed — so publishing a byte-identical frame
//! twice in a row delivers at most once. Callers re-stamp an event
//! ([`ChangeEvent::restamped`](schoolhub_types::ChangeEvent::restamped)) to
//! force redelivery of the same logical change.

use crate::error::SyncResult;
use crate::transport::{Transport, TransportKind};
use schoolhub_types::ContextId;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

/// Well-known key change frames travel under.
pub const CHANGE_KEY: &str = "cpace_change";

/// A change notification delivered to watching contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    /// The key that was written.
    pub key: String,
    /// The key's new value.
    pub value: String,
}

#[derive(Default)]
struct StoreInner {
    values: HashMap<String, String>,
    watchers: HashMap<ContextId, VecDeque<StoreChange>>,
}

/// The same-origin key-value store shared by every context.
///
/// Cloning yields another handle to the same store.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl SharedStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a context to receive change notifications.
    ///
    /// Changes made before the watch are never observed.
    pub fn watch(&self, context: ContextId) {
        self.locked().watchers.entry(context).or_default();
    }

    /// Writes `value` under `key` on behalf of `origin`.
    ///
    /// Every watcher except the writer is notified, and only when the
    /// stored value actually changed. Returns whether a change occurred.
    pub fn set(&self, origin: ContextId, key: &str, value: &str) -> bool {
        let mut inner = self.locked();
        if inner.values.get(key).is_some_and(|stored| stored == value) {
            return false;
        }
        inner.values.insert(key.to_owned(), value.to_owned());

        for (context, pending) in inner.watchers.iter_mut() {
            if *context != origin {
                pending.push_back(StoreChange {
                    key: key.to_owned(),
                    value: value.to_owned(),
                });
            }
        }
        true
    }

    /// Reads the current value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.locked().values.get(key).cloned()
    }

    /// Takes the next pending change notification for a context.
    pub fn take_change(&self, context: &ContextId) -> Option<StoreChange> {
        self.locked().watchers.get_mut(context)?.pop_front()
    }

    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }
}

/// The store-backed fallback endpoint for one context.
///
/// Installed when the broadcast channel cannot be constructed; stays the
/// active path for the remainder of the context's lifetime.
pub struct StoreTransport {
    context: ContextId,
    store: SharedStore,
}

impl StoreTransport {
    /// Installs the fallback path for one browsing context.
    pub fn install(store: &SharedStore, context: ContextId) -> Self {
        store.watch(context);
        Self {
            context,
            store: store.clone(),
        }
    }

    /// The context this endpoint belongs to.
    #[must_use]
    pub fn context(&self) -> ContextId {
        self.context
    }
}

impl Transport for StoreTransport {
    fn publish(&self, frame: &str) -> SyncResult<()> {
        if !self.store.set(self.context, CHANGE_KEY, frame) {
            // Value unchanged: the store will not re-notify anyone.
            trace!(context = %self.context, "identical frame suppressed by store");
        }
        Ok(())
    }

    fn try_recv(&self) -> Option<String> {
        // The store is shared with unrelated keys; only the change key
        // carries event frames.
        loop {
            let change = self.store.take_change(&self.context)?;
            if change.key == CHANGE_KEY {
                return Some(change.value);
            }
        }
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Store
    }
}

//! Primary transport: the shared broadcast channel.
//!
//! Models a same-origin broadcast channel. All contexts attached to one
//! [`ChannelBus`] form a broadcast group: a published frame is copied into
//! every other member's queue, never the publisher's own. Environments that
//! lack the channel are modeled by an unsupported bus, where `open` fails
//! and the notifier falls back to store events.

use crate::error::{SyncError, SyncResult};
use crate::transport::{Transport, TransportKind};
use schoolhub_types::ContextId;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

#[derive(Default, Debug)]
struct BusInner {
    supported: bool,
    queues: HashMap<ContextId, VecDeque<String>>,
}

/// The broadcast medium shared by every context of one origin.
///
/// Cloning yields another handle to the same bus.
#[derive(Clone, Debug)]
pub struct ChannelBus {
    inner: Arc<Mutex<BusInner>>,
}

impl ChannelBus {
    /// A bus on which channels can be opened.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                supported: true,
                queues: HashMap::new(),
            })),
        }
    }

    /// A bus modeling an environment without broadcast-channel support:
    /// every `open` fails, forcing the fallback transport.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner::default())),
        }
    }

    /// Whether channels can be opened on this bus.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.locked().supported
    }

    fn locked(&self) -> MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap()
    }
}

impl Default for ChannelBus {
    fn default() -> Self {
        Self::new()
    }
}

/// One context's endpoint on the broadcast channel.
///
/// Lives for the lifetime of the browsing context; there is no explicit
/// teardown, the queue is dropped with the bus.
#[derive(Debug)]
pub struct TabChannel {
    context: ContextId,
    bus: ChannelBus,
}

impl TabChannel {
    /// Opens the channel for one browsing context.
    ///
    /// Fails with [`SyncError::ChannelUnavailable`] when the environment
    /// does not support the broadcast channel. Frames published before the
    /// open are never observed.
    pub fn open(bus: &ChannelBus, context: ContextId) -> SyncResult<Self> {
        let mut inner = bus.locked();
        if !inner.supported {
            return Err(SyncError::ChannelUnavailable(
                "broadcast channel not supported in this context".into(),
            ));
        }
        inner.queues.entry(context).or_default();
        drop(inner);

        Ok(Self {
            context,
            bus: bus.clone(),
        })
    }

    /// The context this endpoint belongs to.
    #[must_use]
    pub fn context(&self) -> ContextId {
        self.context
    }
}

impl Transport for TabChannel {
    fn publish(&self, frame: &str) -> SyncResult<()> {
        let mut inner = self.bus.locked();
        for (context, queue) in inner.queues.iter_mut() {
            if *context != self.context {
                queue.push_back(frame.to_owned());
            }
        }
        trace!(context = %self.context, "frame broadcast on channel");
        Ok(())
    }

    fn try_recv(&self) -> Option<String> {
        self.bus.locked().queues.get_mut(&self.context)?.pop_front()
    }

    fn kind(&self) -> TransportKind {
        TransportKind::Channel
    }
}

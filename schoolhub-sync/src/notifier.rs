//! The cross-tab change notifier.
//!
//! Propagates record mutations from the context that performed them to
//! every other open same-origin context, without a server round trip.
//! Delivery is best-effort and fire-and-forget: no acknowledgement, no
//! backlog, no replay for contexts that were not yet subscribed.

use crate::channel::{ChannelBus, TabChannel};
use crate::error::SyncResult;
use crate::store::{SharedStore, StoreTransport};
use crate::transport::{Transport, TransportKind};
use schoolhub_types::{ChangeEvent, ContextId};
use tracing::{debug, warn};

/// Where the notifier is in its lifecycle.
///
/// `Uninitialized` exists only during construction; a built notifier is
/// either `Subscribed` (primary channel) or `Unavailable` (fallback store
/// path) for the remainder of the context's lifetime. There is no
/// transition back and no explicit teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No transport attached yet.
    Uninitialized,
    /// The broadcast channel was constructed and is the active path.
    Subscribed,
    /// Channel construction failed; the store fallback is the active path.
    Unavailable,
}

type Handler = Box<dyn FnMut(&ChangeEvent) + Send>;

/// One context's publish/subscribe endpoint for change events.
pub struct Notifier {
    context: ContextId,
    state: ChannelState,
    transport: Box<dyn Transport>,
    handlers: Vec<Handler>,
}

impl Notifier {
    /// Attaches a context to the notification medium.
    ///
    /// Tries the broadcast channel first; when the environment does not
    /// support it, installs the store fallback and stays on it for the
    /// lifetime of the context.
    #[must_use]
    pub fn attach(bus: &ChannelBus, store: &SharedStore, context: ContextId) -> Self {
        let (state, transport): (ChannelState, Box<dyn Transport>) =
            match TabChannel::open(bus, context) {
                Ok(channel) => (ChannelState::Subscribed, Box::new(channel)),
                Err(err) => {
                    warn!(%context, "broadcast channel unavailable, using store events: {err}");
                    (
                        ChannelState::Unavailable,
                        Box::new(StoreTransport::install(store, context)),
                    )
                }
            };

        Self {
            context,
            state,
            transport,
            handlers: Vec::new(),
        }
    }

    /// The context this notifier serves.
    #[must_use]
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// The lifecycle state settled at construction.
    #[must_use]
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// The delivery mechanism in use.
    #[must_use]
    pub fn transport_kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// Broadcasts an event to every other subscribed context.
    ///
    /// The publisher never receives its own events. On the fallback path,
    /// a byte-identical republish is suppressed by the store; republish
    /// via [`ChangeEvent::restamped`] to force redelivery.
    pub fn publish(&self, event: &ChangeEvent) -> SyncResult<()> {
        let frame = event.encode()?;
        self.transport.publish(&frame)?;
        debug!(event = %event.id, record = %event.record_id, "change event published");
        Ok(())
    }

    /// Registers a callback invoked once per received event, in order.
    pub fn subscribe(&mut self, handler: impl FnMut(&ChangeEvent) + Send + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Drains every pending frame from the transport.
    ///
    /// Each decoded event is handed to the subscribed handlers in arrival
    /// order, then returned to the caller. Malformed frames are dropped
    /// with a warning; they never surface as a failure.
    pub fn pump(&mut self) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        while let Some(frame) = self.transport.try_recv() {
            match ChangeEvent::decode(&frame) {
                Ok(event) => {
                    for handler in &mut self.handlers {
                        handler(&event);
                    }
                    events.push(event);
                }
                Err(err) => warn!(context = %self.context, "dropping malformed frame: {err}"),
            }
        }
        events
    }
}

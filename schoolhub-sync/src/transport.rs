//! Transport layer abstraction.
//!
//! A transport carries encoded change frames between same-origin browsing
//! contexts. The notifier depends only on this trait; the two concrete
//! backends (broadcast channel, shared-store change events) are selected at
//! initialization and never swapped afterwards.

/// Which delivery mechanism a transport uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The broadcast channel shared by same-origin contexts.
    Channel,
    /// Key-value store change notifications.
    Store,
}

/// A same-origin, best-effort delivery mechanism for encoded change frames.
///
/// Publishing fans a copy of the frame out to every *other* subscribed
/// context, never the publisher itself. There is no acknowledgement and no
/// replay: a context that subscribes after a frame was published never
/// observes it.
pub trait Transport: Send {
    /// Hands an encoded frame to the transport for delivery.
    ///
    /// Synchronous from the caller's point of view; when other contexts see
    /// the frame is up to them (they drain their queues from their own event
    /// loops).
    fn publish(&self, frame: &str) -> crate::error::SyncResult<()>;

    /// Takes the next pending frame received from another context, if any.
    fn try_recv(&self) -> Option<String>;

    /// The delivery mechanism in use.
    fn kind(&self) -> TransportKind;
}

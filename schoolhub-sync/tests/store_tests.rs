use schoolhub_sync::{SharedStore, StoreChange, StoreTransport, Transport, TransportKind, CHANGE_KEY};
use schoolhub_types::ContextId;

// ── SharedStore ──────────────────────────────────────────────────

#[test]
fn set_and_get() {
    let store = SharedStore::new();
    let ctx = ContextId::new();

    assert!(store.set(ctx, "k", "v"));
    assert_eq!(store.get("k").as_deref(), Some("v"));
    assert!(store.get("missing").is_none());
}

#[test]
fn set_notifies_other_watchers() {
    let store = SharedStore::new();
    let writer = ContextId::new();
    let watcher = ContextId::new();
    store.watch(watcher);

    store.set(writer, "k", "v");

    assert_eq!(
        store.take_change(&watcher),
        Some(StoreChange {
            key: "k".into(),
            value: "v".into(),
        })
    );
}

#[test]
fn writer_is_not_notified() {
    let store = SharedStore::new();
    let writer = ContextId::new();
    store.watch(writer);

    store.set(writer, "k", "v");
    assert!(store.take_change(&writer).is_none());
}

#[test]
fn identical_value_fires_no_change() {
    let store = SharedStore::new();
    let writer = ContextId::new();
    let watcher = ContextId::new();
    store.watch(watcher);

    assert!(store.set(writer, "k", "v"));
    assert!(store.take_change(&watcher).is_some());

    // Same bytes again: the store sees no change.
    assert!(!store.set(writer, "k", "v"));
    assert!(store.take_change(&watcher).is_none());
}

#[test]
fn changed_value_fires_again() {
    let store = SharedStore::new();
    let writer = ContextId::new();
    let watcher = ContextId::new();
    store.watch(watcher);

    store.set(writer, "k", "v1");
    store.set(writer, "k", "v2");

    assert_eq!(store.take_change(&watcher).unwrap().value, "v1");
    assert_eq!(store.take_change(&watcher).unwrap().value, "v2");
}

#[test]
fn late_watcher_sees_no_backlog() {
    let store = SharedStore::new();
    let writer = ContextId::new();

    store.set(writer, "k", "early");

    let late = ContextId::new();
    store.watch(late);
    assert!(store.take_change(&late).is_none());
}

// ── StoreTransport ───────────────────────────────────────────────

#[test]
fn transport_kind_is_store() {
    let store = SharedStore::new();
    let ctx = ContextId::new();
    let transport = StoreTransport::install(&store, ctx);
    assert_eq!(transport.kind(), TransportKind::Store);
    assert_eq!(transport.context(), ctx);
}

#[test]
fn publish_lands_under_change_key() {
    let store = SharedStore::new();
    let transport = StoreTransport::install(&store, ContextId::new());

    transport.publish("frame").unwrap();
    assert_eq!(store.get(CHANGE_KEY).as_deref(), Some("frame"));
}

#[test]
fn publish_reaches_other_transport_not_self() {
    let store = SharedStore::new();
    let a = StoreTransport::install(&store, ContextId::new());
    let b = StoreTransport::install(&store, ContextId::new());

    a.publish("frame").unwrap();

    assert!(a.try_recv().is_none());
    assert_eq!(b.try_recv().as_deref(), Some("frame"));
}

#[test]
fn identical_frame_is_delivered_at_most_once() {
    let store = SharedStore::new();
    let a = StoreTransport::install(&store, ContextId::new());
    let b = StoreTransport::install(&store, ContextId::new());

    a.publish("same").unwrap();
    a.publish("same").unwrap();

    assert_eq!(b.try_recv().as_deref(), Some("same"));
    assert!(b.try_recv().is_none());
}

#[test]
fn unrelated_keys_are_skipped() {
    let store = SharedStore::new();
    let reader_ctx = ContextId::new();
    let reader = StoreTransport::install(&store, reader_ctx);
    let other = ContextId::new();

    // Another page feature writes an unrelated key; only change-key frames
    // surface through the transport.
    store.set(other, "session_user", "amina");
    store.set(other, CHANGE_KEY, "frame");

    assert_eq!(reader.try_recv().as_deref(), Some("frame"));
    assert!(reader.try_recv().is_none());
}

use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::{ChatMessage, TypingNotice};

fn live(text: &str) -> InboundEvent {
    InboundEvent::ReceiveMessage(ChatMessage {
        username: "Ann".to_owned(),
        avatar: None,
        text: text.to_owned(),
        time: None,
    })
}

fn counter() -> (Arc<AtomicUsize>, Handler) {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let handler: Handler = Arc::new(move |_: &InboundEvent| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (hits, handler)
}

#[test]
fn dispatch_reaches_only_matching_kind() {
    let bus = EventBus::default();
    let (messages, on_message) = counter();
    let (typing, on_typing) = counter();
    let _a = bus.subscribe(EventKind::ReceiveMessage, on_message);
    let _b = bus.subscribe(EventKind::UserTyping, on_typing);

    assert_eq!(bus.dispatch(&live("hi")), 1);
    assert_eq!(messages.load(Ordering::SeqCst), 1);
    assert_eq!(typing.load(Ordering::SeqCst), 0);
}

#[test]
fn dispatch_preserves_subscription_order() {
    let bus = EventBus::default();
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&order);
    let second = Arc::clone(&order);
    let _a = bus.subscribe(
        EventKind::ReceiveMessage,
        Arc::new(move |_: &InboundEvent| first.lock().expect("lock").push(1)),
    );
    let _b = bus.subscribe(
        EventKind::ReceiveMessage,
        Arc::new(move |_: &InboundEvent| second.lock().expect("lock").push(2)),
    );

    bus.dispatch(&live("x"));
    assert_eq!(*order.lock().expect("lock"), vec![1, 2]);
}

#[test]
fn unsubscribe_removes_handler() {
    let bus = EventBus::default();
    let (hits, handler) = counter();
    let sub = bus.subscribe(EventKind::ReceiveMessage, handler);
    assert_eq!(bus.subscriber_count(), 1);

    sub.unsubscribe();

    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.dispatch(&live("late")), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_handle_unsubscribes_only_that_handler() {
    let bus = EventBus::default();
    let (_, a) = counter();
    let (kept_hits, b) = counter();
    let sub_a = bus.subscribe(EventKind::ReceiveMessage, a);
    let _sub_b = bus.subscribe(EventKind::ReceiveMessage, b);

    drop(sub_a);

    assert_eq!(bus.dispatch(&live("x")), 1);
    assert_eq!(kept_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_bus_is_harmless() {
    let bus = EventBus::default();
    let (_, handler) = counter();
    let sub = bus.subscribe(EventKind::ConnectError, handler);
    drop(bus);
    sub.unsubscribe();
}

#[test]
fn handler_may_unsubscribe_during_dispatch() {
    let bus = EventBus::default();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let inner = Arc::clone(&slot);
    let sub = bus.subscribe(
        EventKind::UserTyping,
        Arc::new(move |_: &InboundEvent| {
            inner.lock().expect("lock").take();
        }),
    );
    *slot.lock().expect("lock") = Some(sub);

    bus.dispatch(&InboundEvent::UserTyping(TypingNotice { username: "Bob".to_owned() }));
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn offline_connection_refuses_emits() {
    let conn = ChatConnection::offline();
    let sent = conn.emit(&OutboundEvent::Typing(TypingNotice { username: "Ann".to_owned() }));
    assert!(!sent);
}

#[test]
fn recording_transport_captures_emits_in_order() {
    let transport = RecordingTransport::default();
    let conn = ChatConnection::new(transport.clone());
    conn.emit(&OutboundEvent::Typing(TypingNotice { username: "a".to_owned() }));
    conn.emit(&OutboundEvent::Typing(TypingNotice { username: "b".to_owned() }));

    let names = transport
        .sent()
        .into_iter()
        .map(|e| match e {
            OutboundEvent::Typing(n) => n.username,
            other => panic!("unexpected {other:?}"),
        })
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b"]);
}

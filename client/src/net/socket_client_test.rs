use super::*;
use crate::net::types::{ChatMessage, OutboundEvent, TypingNotice};

#[test]
fn react_answers_open_with_namespace_connect() {
    let raw = r#"0{"sid":"s1","upgrades":[],"pingInterval":25000,"pingTimeout":20000}"#;
    assert_eq!(react(raw), Reaction::Reply("40".to_owned()));
}

#[test]
fn react_answers_ping_with_pong() {
    assert_eq!(react("2"), Reaction::Reply("3".to_owned()));
}

#[test]
fn react_reports_connect_ack_and_refusal() {
    assert_eq!(react(r#"40{"sid":"x"}"#), Reaction::Connected);
    assert_eq!(react(r#"44{"message":"Not allowed"}"#), Reaction::Refused("Not allowed".to_owned()));
}

#[test]
fn react_treats_close_and_disconnect_as_closed() {
    assert_eq!(react("1"), Reaction::Closed);
    assert_eq!(react("41"), Reaction::Closed);
}

#[test]
fn react_dispatches_known_events() {
    let reaction = react(r#"42["userTyping",{"username":"Bob"}]"#);
    assert_eq!(
        reaction,
        Reaction::Dispatch(InboundEvent::UserTyping(TypingNotice { username: "Bob".to_owned() }))
    );
}

#[test]
fn react_ignores_unknown_events_and_noise() {
    assert_eq!(react(r#"42["onlineUsers",[]]"#), Reaction::Ignore);
    assert_eq!(react("6"), Reaction::Ignore);
    assert_eq!(react("3"), Reaction::Ignore);
}

#[test]
fn react_flags_malformed_frames() {
    assert!(matches!(react("x"), Reaction::Malformed(_)));
    assert!(matches!(react(r#"42["receiveMessage",{"username":"Ann"}]"#), Reaction::Malformed(_)));
}

#[test]
fn encode_outbound_writes_event_frame() {
    let event = OutboundEvent::SendMessage(ChatMessage {
        username: "Ann".to_owned(),
        avatar: None,
        text: " hi ".to_owned(),
        time: None,
    });
    let raw = encode_outbound(&event);
    assert!(raw.starts_with(r#"42["sendMessage","#));
    let decoded = frames::decode_frame(&raw).expect("decode");
    assert_eq!(decoded, frames::Frame::Message(event.to_packet()));
}

use super::*;

fn handshake() -> Handshake {
    Handshake {
        sid: "sid-1".to_owned(),
        upgrades: Vec::new(),
        ping_interval: 25_000,
        ping_timeout: 20_000,
        max_payload: Some(1_000_000),
    }
}

#[test]
fn handshake_url_rewrites_http_schemes() {
    assert_eq!(
        handshake_url("https://chat.example.com"),
        "wss://chat.example.com/socket.io/?EIO=4&transport=websocket"
    );
    assert_eq!(
        handshake_url("http://localhost:3001/"),
        "ws://localhost:3001/socket.io/?EIO=4&transport=websocket"
    );
}

#[test]
fn handshake_url_keeps_ws_scheme_and_defaults_bare_host() {
    assert_eq!(handshake_url("wss://a.test"), "wss://a.test/socket.io/?EIO=4&transport=websocket");
    assert_eq!(handshake_url("a.test:80"), "ws://a.test:80/socket.io/?EIO=4&transport=websocket");
}

#[test]
fn decode_frame_parses_open_handshake() {
    let raw = r#"0{"sid":"sid-1","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#;
    let frame = decode_frame(raw).expect("decode");
    assert_eq!(frame, Frame::Open(handshake()));
}

#[test]
fn decode_frame_parses_heartbeats() {
    assert_eq!(decode_frame("2").expect("decode"), Frame::Ping(String::new()));
    assert_eq!(decode_frame("3probe").expect("decode"), Frame::Pong("probe".to_owned()));
    assert_eq!(decode_frame("1").expect("decode"), Frame::Close);
    assert_eq!(decode_frame("6").expect("decode"), Frame::Noop);
}

#[test]
fn decode_frame_rejects_empty_and_unknown_types() {
    assert!(matches!(decode_frame(""), Err(CodecError::Empty)));
    assert!(matches!(decode_frame("9"), Err(CodecError::UnknownFrameType('9'))));
    assert!(matches!(decode_frame("49"), Err(CodecError::UnknownPacketType('9'))));
}

#[test]
fn decode_frame_parses_connect_ack_with_sid() {
    let frame = decode_frame(r#"40{"sid":"abc"}"#).expect("decode");
    assert_eq!(
        frame,
        Frame::Message(Packet::Connect {
            namespace: "/".to_owned(),
            data: Some(serde_json::json!({"sid": "abc"})),
        })
    );
}

#[test]
fn decode_frame_parses_event_with_namespace_and_ack_id() {
    let frame = decode_frame(r#"42/chat,7["receiveMessage",{"username":"Ann","text":"hi"}]"#).expect("decode");
    assert_eq!(
        frame,
        Frame::Message(Packet::Event {
            namespace: "/chat".to_owned(),
            id: Some(7),
            name: "receiveMessage".to_owned(),
            args: vec![serde_json::json!({"username": "Ann", "text": "hi"})],
        })
    );
}

#[test]
fn decode_frame_rejects_event_without_name() {
    assert!(matches!(decode_frame("42[1,2]"), Err(CodecError::MissingEventName)));
    assert!(matches!(decode_frame("42[]"), Err(CodecError::MissingEventName)));
}

#[test]
fn decode_frame_rejects_binary_packets() {
    assert!(matches!(
        decode_frame(r#"451-["upload",{"_placeholder":true,"num":0}]"#),
        Err(CodecError::BinaryUnsupported)
    ));
}

#[test]
fn decode_frame_requires_ack_id() {
    assert!(matches!(decode_frame("43[]"), Err(CodecError::MissingAckId)));
    assert_eq!(
        decode_frame(r#"4312["ok"]"#).expect("decode"),
        Frame::Message(Packet::Ack { namespace: "/".to_owned(), id: 12, args: vec![serde_json::json!("ok")] })
    );
}

#[test]
fn decode_frame_reads_connect_error_message_in_both_shapes() {
    let v5 = decode_frame(r#"44{"message":"Not authorized"}"#).expect("decode");
    let v4 = decode_frame(r#"44"Invalid namespace""#).expect("decode");
    assert_eq!(
        v5,
        Frame::Message(Packet::ConnectError { namespace: "/".to_owned(), message: "Not authorized".to_owned() })
    );
    assert_eq!(
        v4,
        Frame::Message(Packet::ConnectError { namespace: "/".to_owned(), message: "Invalid namespace".to_owned() })
    );
}

#[test]
fn decode_frame_reports_malformed_json() {
    assert!(matches!(decode_frame("42[\"x\""), Err(CodecError::Json(_))));
}

#[test]
fn encode_frame_writes_connect_request_and_pong() {
    assert_eq!(encode_frame(&Frame::Message(Packet::connect())), "40");
    assert_eq!(encode_frame(&Frame::Pong(String::new())), "3");
}

#[test]
fn encode_frame_writes_event_packet() {
    let frame = Frame::Message(Packet::event("typing", vec![serde_json::json!({"username": "Ann"})]));
    assert_eq!(encode_frame(&frame), r#"42["typing",{"username":"Ann"}]"#);
}

#[test]
fn encode_frame_prefixes_custom_namespace_and_ack_id() {
    let frame = Frame::Message(Packet::Event {
        namespace: "/chat".to_owned(),
        id: Some(3),
        name: "sendMessage".to_owned(),
        args: Vec::new(),
    });
    assert_eq!(encode_frame(&frame), r#"42/chat,3["sendMessage"]"#);
}

#[test]
fn encoded_event_decodes_to_same_packet() {
    let packet = OutboundEvent::SendMessage(ChatMessage {
        username: "Ann".to_owned(),
        avatar: None,
        text: "hi".to_owned(),
        time: Some("12:00".to_owned()),
    })
    .to_packet();
    let decoded = decode_frame(&encode_frame(&Frame::Message(packet.clone()))).expect("decode");
    assert_eq!(decoded, Frame::Message(packet));
}

//! Shared chat event model and Socket.IO text codec for the realtime WS transport.
//!
//! This crate owns the wire representation spoken between the browser client
//! and the chat server. Each websocket text message carries one Engine.IO v4
//! frame; Engine.IO `message` frames wrap one Socket.IO v5 packet, and Socket.IO
//! `EVENT` packets carry a JSON array `["eventName", arg...]`.
//!
//! Binary attachments (`BINARY_EVENT` / `BINARY_ACK`) are not used by the chat
//! server and are rejected at decode time.

pub mod event;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use event::{ChatMessage, EventKind, InboundEvent, JoinNotice, OutboundEvent, TypingNotice};

/// Namespace used when a packet carries no explicit `/nsp,` prefix.
pub const DEFAULT_NAMESPACE: &str = "/";

/// Error returned by [`decode_frame`] and event payload parsing.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The websocket message was empty.
    #[error("empty frame")]
    Empty,
    /// The leading Engine.IO type digit is not one we know.
    #[error("unknown engine frame type: {0:?}")]
    UnknownFrameType(char),
    /// The leading Socket.IO type digit is not one we know.
    #[error("unknown socket packet type: {0:?}")]
    UnknownPacketType(char),
    /// Binary attachment packets are not supported over the text transport.
    #[error("binary socket packets are not supported")]
    BinaryUnsupported,
    /// An `EVENT` packet did not start with a string event name.
    #[error("event packet is missing its name")]
    MissingEventName,
    /// An `ACK` packet did not carry an ack id.
    #[error("ack packet is missing its id")]
    MissingAckId,
    /// A JSON payload could not be parsed.
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A known event carried a payload of the wrong shape.
    #[error("invalid payload for event {event}: {reason}")]
    InvalidPayload { event: String, reason: String },
}

/// Engine.IO open handshake sent by the server as the first frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    /// Engine.IO session id.
    pub sid: String,
    /// Transports the server would allow upgrading to.
    #[serde(default)]
    pub upgrades: Vec<String>,
    /// Server ping period in milliseconds.
    pub ping_interval: u64,
    /// Grace period after a ping before the server drops the session.
    pub ping_timeout: u64,
    /// Largest payload the server accepts, in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_payload: Option<u64>,
}

/// One Engine.IO frame (one websocket text message).
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// `0{...}`: session opened.
    Open(Handshake),
    /// `1`: session closed by the peer.
    Close,
    /// `2`: heartbeat probe, optionally with a probe payload.
    Ping(String),
    /// `3`: heartbeat reply.
    Pong(String),
    /// `4...`: Socket.IO packet.
    Message(Packet),
    /// `5`: transport upgrade (unused over a websocket-only transport).
    Upgrade,
    /// `6`: no-op.
    Noop,
}

/// One Socket.IO packet carried inside an Engine.IO message frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Packet {
    /// `0`: namespace connect request (client) or acknowledgement (server).
    Connect { namespace: String, data: Option<Value> },
    /// `1`: namespace disconnect.
    Disconnect { namespace: String },
    /// `2`: named event with arguments.
    Event { namespace: String, id: Option<u64>, name: String, args: Vec<Value> },
    /// `3`: acknowledgement of an event that carried an id.
    Ack { namespace: String, id: u64, args: Vec<Value> },
    /// `4`: the server refused the namespace connection.
    ConnectError { namespace: String, message: String },
}

impl Packet {
    /// Client-side namespace connect request for the default namespace.
    #[must_use]
    pub fn connect() -> Self {
        Self::Connect { namespace: DEFAULT_NAMESPACE.to_owned(), data: None }
    }

    /// Event packet on the default namespace without an ack id.
    #[must_use]
    pub fn event(name: &str, args: Vec<Value>) -> Self {
        Self::Event { namespace: DEFAULT_NAMESPACE.to_owned(), id: None, name: name.to_owned(), args }
    }

    fn type_digit(&self) -> char {
        match self {
            Self::Connect { .. } => '0',
            Self::Disconnect { .. } => '1',
            Self::Event { .. } => '2',
            Self::Ack { .. } => '3',
            Self::ConnectError { .. } => '4',
        }
    }

    fn namespace(&self) -> &str {
        match self {
            Self::Connect { namespace, .. }
            | Self::Disconnect { namespace }
            | Self::Event { namespace, .. }
            | Self::Ack { namespace, .. }
            | Self::ConnectError { namespace, .. } => namespace,
        }
    }
}

/// Build the websocket URL for a chat server base URL.
///
/// `http`/`https` bases are rewritten to `ws`/`wss`; a bare host is treated as
/// plain `ws`. Trailing slashes on the base are dropped.
#[must_use]
pub fn handshake_url(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if base.starts_with("ws://") || base.starts_with("wss://") {
        base.to_owned()
    } else {
        format!("ws://{base}")
    };
    format!("{base}/socket.io/?EIO=4&transport=websocket")
}

/// Encode a frame into its websocket text form.
#[must_use]
pub fn encode_frame(frame: &Frame) -> String {
    match frame {
        Frame::Open(handshake) => {
            format!("0{}", serde_json::to_string(handshake).unwrap_or_default())
        }
        Frame::Close => "1".to_owned(),
        Frame::Ping(probe) => format!("2{probe}"),
        Frame::Pong(probe) => format!("3{probe}"),
        Frame::Message(packet) => format!("4{}", encode_packet(packet)),
        Frame::Upgrade => "5".to_owned(),
        Frame::Noop => "6".to_owned(),
    }
}

/// Decode one websocket text message into a frame.
///
/// # Errors
///
/// Returns [`CodecError`] for empty input, unknown type digits, binary
/// packets, or malformed JSON payloads.
pub fn decode_frame(raw: &str) -> Result<Frame, CodecError> {
    let mut chars = raw.chars();
    let kind = chars.next().ok_or(CodecError::Empty)?;
    let rest = chars.as_str();

    match kind {
        '0' => Ok(Frame::Open(serde_json::from_str(rest)?)),
        '1' => Ok(Frame::Close),
        '2' => Ok(Frame::Ping(rest.to_owned())),
        '3' => Ok(Frame::Pong(rest.to_owned())),
        '4' => Ok(Frame::Message(decode_packet(rest)?)),
        '5' => Ok(Frame::Upgrade),
        '6' => Ok(Frame::Noop),
        other => Err(CodecError::UnknownFrameType(other)),
    }
}

fn encode_packet(packet: &Packet) -> String {
    let mut out = String::new();
    out.push(packet.type_digit());

    let namespace = packet.namespace();
    if namespace != DEFAULT_NAMESPACE && !namespace.is_empty() {
        out.push_str(namespace);
        out.push(',');
    }

    match packet {
        Packet::Connect { data, .. } => {
            if let Some(data) = data {
                out.push_str(&data.to_string());
            }
        }
        Packet::Disconnect { .. } => {}
        Packet::Event { id, name, args, .. } => {
            if let Some(id) = id {
                out.push_str(&id.to_string());
            }
            let mut items = Vec::with_capacity(args.len() + 1);
            items.push(Value::String(name.clone()));
            items.extend(args.iter().cloned());
            out.push_str(&Value::Array(items).to_string());
        }
        Packet::Ack { id, args, .. } => {
            out.push_str(&id.to_string());
            out.push_str(&Value::Array(args.clone()).to_string());
        }
        Packet::ConnectError { message, .. } => {
            out.push_str(&serde_json::json!({ "message": message }).to_string());
        }
    }
    out
}

fn decode_packet(raw: &str) -> Result<Packet, CodecError> {
    let mut chars = raw.chars();
    let kind = chars.next().ok_or(CodecError::Empty)?;
    let mut rest = chars.as_str();

    if matches!(kind, '5' | '6') {
        return Err(CodecError::BinaryUnsupported);
    }

    let namespace = if rest.starts_with('/') {
        let (nsp, tail) = rest.split_once(',').unwrap_or((rest, ""));
        rest = tail;
        nsp.to_owned()
    } else {
        DEFAULT_NAMESPACE.to_owned()
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let id = if digits > 0 { rest[..digits].parse::<u64>().ok() } else { None };
    let payload = rest[digits..].trim();

    match kind {
        '0' => {
            let data = if payload.is_empty() { None } else { Some(serde_json::from_str(payload)?) };
            Ok(Packet::Connect { namespace, data })
        }
        '1' => Ok(Packet::Disconnect { namespace }),
        '2' => {
            let mut items = parse_array(payload)?.into_iter();
            let name = match items.next() {
                Some(Value::String(name)) => name,
                _ => return Err(CodecError::MissingEventName),
            };
            Ok(Packet::Event { namespace, id, name, args: items.collect() })
        }
        '3' => {
            let id = id.ok_or(CodecError::MissingAckId)?;
            Ok(Packet::Ack { namespace, id, args: parse_array(payload)? })
        }
        '4' => Ok(Packet::ConnectError { namespace, message: connect_error_message(payload)? }),
        other => Err(CodecError::UnknownPacketType(other)),
    }
}

fn parse_array(payload: &str) -> Result<Vec<Value>, CodecError> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(payload)? {
        Value::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

/// Socket.IO v5 sends `{"message": "..."}`; older servers send a bare string.
fn connect_error_message(payload: &str) -> Result<String, CodecError> {
    if payload.is_empty() {
        return Ok(String::new());
    }
    let value = serde_json::from_str::<Value>(payload)?;
    Ok(match value {
        Value::String(message) => message,
        Value::Object(ref map) => map
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), ToOwned::to_owned),
        other => other.to_string(),
    })
}

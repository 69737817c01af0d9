//! Chat payloads and the named events exchanged with the chat server.
//!
//! DESIGN
//! ======
//! Outbound events are typed end to end. Inbound events are parsed leniently:
//! unknown event names are skipped, and individual malformed history rows are
//! dropped rather than failing the whole snapshot.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CodecError, Packet};

pub const SEND_MESSAGE: &str = "sendMessage";
pub const USER_JOINED: &str = "userJoined";
pub const TYPING: &str = "typing";
pub const CHAT_HISTORY: &str = "chatHistory";
pub const RECEIVE_MESSAGE: &str = "receiveMessage";
pub const USER_TYPING: &str = "userTyping";

/// A single chat message as carried on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the sender.
    pub username: String,
    /// Sender avatar as a data URI or URL. An empty string reads as no avatar.
    #[serde(default, deserialize_with = "non_empty_avatar", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Message body, untrimmed.
    pub text: String,
    /// Sender-local clock label, e.g. `"14:05"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Payload of the `userJoined` announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinNotice {
    pub username: String,
    #[serde(default, deserialize_with = "non_empty_avatar", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

fn non_empty_avatar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let avatar = Option::<String>::deserialize(deserializer)?;
    Ok(avatar.filter(|a| !a.is_empty()))
}

/// Payload of `typing` (outbound) and `userTyping` (inbound).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingNotice {
    pub username: String,
}

/// Events the client publishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutboundEvent {
    SendMessage(ChatMessage),
    UserJoined(JoinNotice),
    Typing(TypingNotice),
}

impl OutboundEvent {
    /// Wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SendMessage(_) => SEND_MESSAGE,
            Self::UserJoined(_) => USER_JOINED,
            Self::Typing(_) => TYPING,
        }
    }

    /// Single JSON argument carried with the event.
    #[must_use]
    pub fn payload(&self) -> Value {
        let value = match self {
            Self::SendMessage(msg) => serde_json::to_value(msg),
            Self::UserJoined(notice) => serde_json::to_value(notice),
            Self::Typing(notice) => serde_json::to_value(notice),
        };
        value.unwrap_or_default()
    }

    /// Socket.IO event packet for this event on the default namespace.
    #[must_use]
    pub fn to_packet(&self) -> Packet {
        Packet::event(self.name(), vec![self.payload()])
    }
}

/// Subscription key for inbound events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    ChatHistory,
    ReceiveMessage,
    UserTyping,
    ConnectError,
}

/// Events the client consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboundEvent {
    /// Full backlog, sent once per connection.
    ChatHistory(Vec<ChatMessage>),
    /// One live message.
    ReceiveMessage(ChatMessage),
    /// Another user is composing.
    UserTyping(TypingNotice),
    /// The transport could not establish or keep the connection.
    ConnectError(String),
}

impl InboundEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ChatHistory(_) => EventKind::ChatHistory,
            Self::ReceiveMessage(_) => EventKind::ReceiveMessage,
            Self::UserTyping(_) => EventKind::UserTyping,
            Self::ConnectError(_) => EventKind::ConnectError,
        }
    }

    /// Interpret a named Socket.IO event.
    ///
    /// Returns `Ok(None)` for event names the client does not consume.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidPayload`] when a known event carries a
    /// payload of the wrong shape.
    pub fn from_event(name: &str, args: &[Value]) -> Result<Option<Self>, CodecError> {
        let first = args.first().unwrap_or(&Value::Null);
        let event = match name {
            CHAT_HISTORY => {
                let rows = first
                    .as_array()
                    .ok_or_else(|| invalid(name, "expected an array of messages"))?;
                Self::ChatHistory(
                    rows.iter()
                        .filter_map(|row| serde_json::from_value::<ChatMessage>(row.clone()).ok())
                        .collect(),
                )
            }
            RECEIVE_MESSAGE => Self::ReceiveMessage(
                serde_json::from_value(first.clone()).map_err(|e| invalid(name, &e.to_string()))?,
            ),
            USER_TYPING => Self::UserTyping(parse_typing(name, first)?),
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}

/// Some servers relay the bare username instead of `{ username }`.
fn parse_typing(name: &str, value: &Value) -> Result<TypingNotice, CodecError> {
    if let Some(username) = value.as_str() {
        return Ok(TypingNotice { username: username.to_owned() });
    }
    serde_json::from_value(value.clone()).map_err(|e| invalid(name, &e.to_string()))
}

fn invalid(event: &str, reason: &str) -> CodecError {
    CodecError::InvalidPayload { event: event.to_owned(), reason: reason.to_owned() }
}

//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! The chat payloads live in the `frames` crate so the codec and the UI agree
//! on one schema.

pub use frames::{ChatMessage, EventKind, InboundEvent, JoinNotice, OutboundEvent, TypingNotice};

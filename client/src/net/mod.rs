//! Networking modules for the chat server event protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` defines the injected connection contract, `socket_client`
//! drives the browser websocket, `chat_sync` maps events onto chat state,
//! `api` talks to the host for runtime config, and `types` re-exports the
//! shared wire schema.

pub mod api;
pub mod chat_sync;
pub mod socket_client;
pub mod transport;
pub mod types;

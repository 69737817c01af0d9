//! Socket.IO websocket client for real-time communication with the chat server.
//!
//! The socket client manages the websocket lifecycle: Engine.IO handshake,
//! namespace connect, heartbeat replies, event dispatch onto the [`EventBus`],
//! and reconnection with exponential backoff. Reconnect policy belongs to the
//! transport; the session and chat layers never retry anything themselves.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. [`react`] is the pure frame-handling core
//! and is compiled for tests as well.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames are logged and skipped. Handshake refusals and socket
//! failures are published as [`InboundEvent::ConnectError`] so subscribers can
//! log them, then the loop backs off and reconnects.

#[cfg(test)]
#[path = "socket_client_test.rs"]
mod socket_client_test;

#[cfg(any(test, feature = "hydrate"))]
use frames::{Frame, Packet};

#[cfg(any(test, feature = "hydrate"))]
use super::types::InboundEvent;
#[cfg(feature = "hydrate")]
use super::transport::{EventBus, Handler, Subscription, Transport};
#[cfg(feature = "hydrate")]
use super::types::{EventKind, OutboundEvent};

#[cfg(feature = "hydrate")]
const INITIAL_BACKOFF_MS: u32 = 1000;
#[cfg(feature = "hydrate")]
const MAX_BACKOFF_MS: u32 = 10_000;

/// What the client should do in response to one incoming websocket message.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq)]
pub(crate) enum Reaction {
    /// Write this text back to the server.
    Reply(String),
    /// The namespace connect was acknowledged.
    Connected,
    /// The server refused the namespace connect.
    Refused(String),
    /// Publish an inbound event.
    Dispatch(InboundEvent),
    /// The server closed the session.
    Closed,
    /// Could not be decoded; carries the reason for logging.
    Malformed(String),
    /// Nothing to do.
    Ignore,
}

/// Decide how to handle one raw websocket text message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn react(raw: &str) -> Reaction {
    let frame = match frames::decode_frame(raw) {
        Ok(frame) => frame,
        Err(e) => return Reaction::Malformed(e.to_string()),
    };

    match frame {
        Frame::Open(_) => Reaction::Reply(frames::encode_frame(&Frame::Message(Packet::connect()))),
        Frame::Ping(probe) => Reaction::Reply(frames::encode_frame(&Frame::Pong(probe))),
        Frame::Close | Frame::Message(Packet::Disconnect { .. }) => Reaction::Closed,
        Frame::Message(Packet::Connect { .. }) => Reaction::Connected,
        Frame::Message(Packet::ConnectError { message, .. }) => Reaction::Refused(message),
        Frame::Message(Packet::Event { name, args, .. }) => match InboundEvent::from_event(&name, &args) {
            Ok(Some(event)) => Reaction::Dispatch(event),
            Ok(None) => Reaction::Ignore,
            Err(e) => Reaction::Malformed(e.to_string()),
        },
        Frame::Message(Packet::Ack { .. }) | Frame::Pong(_) | Frame::Upgrade | Frame::Noop => Reaction::Ignore,
    }
}

/// Encode an outbound event as the websocket text the server expects.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn encode_outbound(event: &super::types::OutboundEvent) -> String {
    frames::encode_frame(&Frame::Message(event.to_packet()))
}

/// Browser websocket transport.
///
/// Outbound events are queued on an unbounded channel and flushed once the
/// namespace connect is acknowledged, so events emitted while connecting are
/// delivered rather than dropped.
#[cfg(feature = "hydrate")]
pub struct SocketTransport {
    bus: EventBus,
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

#[cfg(feature = "hydrate")]
impl Transport for SocketTransport {
    fn emit(&self, event: &OutboundEvent) -> bool {
        self.tx.unbounded_send(encode_outbound(event)).is_ok()
    }

    fn subscribe(&self, kind: EventKind, handler: Handler) -> Subscription {
        self.bus.subscribe(kind, handler)
    }
}

/// Spawn the socket client lifecycle as a local async task.
///
/// The server URL is resolved from the host's `/api/config` before the first
/// connect. The returned transport is the process-wide connection.
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client() -> SocketTransport {
    use futures::channel::mpsc;

    let bus = EventBus::default();
    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(socket_client_loop(bus.clone(), tx.clone(), rx));

    SocketTransport { bus, tx }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_client_loop(
    bus: EventBus,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let config = crate::net::api::fetch_client_config().await;
    let url = frames::handshake_url(&crate::net::api::resolve_server_url(config.as_ref(), &origin));
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        match connect_and_run(&url, &bus, &tx, &rx).await {
            Ok(()) => {
                leptos::logging::log!("chat socket disconnected cleanly");
                backoff_ms = INITIAL_BACKOFF_MS;
            }
            Err(e) => {
                bus.dispatch(&InboundEvent::ConnectError(e));
            }
        }

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
    }
}

/// Connect to the websocket, complete the handshake, then pump events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    bus: &EventBus,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Handshake: Engine.IO open, then namespace connect ack. Outbound events
    // stay queued until the ack arrives.
    loop {
        let text = match ws_read.next().await {
            Some(Ok(Message::Text(text))) => text,
            Some(Ok(Message::Bytes(_))) => continue,
            Some(Err(e)) => return Err(e.to_string()),
            None => return Err("socket closed during handshake".to_owned()),
        };
        match react(&text) {
            Reaction::Reply(reply) => {
                ws_write
                    .send(Message::Text(reply))
                    .await
                    .map_err(|e| e.to_string())?;
            }
            Reaction::Connected => break,
            Reaction::Refused(reason) => return Err(reason),
            Reaction::Closed => return Err("server closed during handshake".to_owned()),
            Reaction::Dispatch(event) => {
                bus.dispatch(&event);
            }
            Reaction::Malformed(reason) => leptos::logging::warn!("chat socket frame dropped: {reason}"),
            Reaction::Ignore => {}
        }
    }

    leptos::logging::log!("chat socket connected");

    // Forward queued outgoing events to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: heartbeats are answered through the same queue.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match react(&text) {
                    Reaction::Reply(reply) => {
                        let _ = tx.unbounded_send(reply);
                    }
                    Reaction::Dispatch(event) => {
                        bus.dispatch(&event);
                    }
                    Reaction::Closed => break,
                    Reaction::Refused(reason) => {
                        bus.dispatch(&InboundEvent::ConnectError(reason));
                        break;
                    }
                    Reaction::Malformed(reason) => {
                        leptos::logging::warn!("chat socket frame dropped: {reason}");
                    }
                    Reaction::Connected | Reaction::Ignore => {}
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    return Err(e.to_string());
                }
            }
        }
        Ok(())
    };

    // Run send/recv loops; when either finishes, the connection is done.
    match futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await {
        futures::future::Either::Left(((), _)) => Ok(()),
        futures::future::Either::Right((result, _)) => result,
    }
}

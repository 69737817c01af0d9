//! Message synchronizer between the connection and chat state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inbound `chatHistory` / `receiveMessage` / `userTyping` events are mirrored
//! into [`ChatState`]; user actions in the composer become `sendMessage` and
//! `typing` events. The pure `apply_inbound` / `send` / `notify_typing`
//! functions carry the rules, and [`install_chat_sync`] binds them to Leptos
//! signals for the lifetime of the mounting component.

#[cfg(test)]
#[path = "chat_sync_test.rs"]
mod chat_sync_test;

use leptos::prelude::*;

use super::transport::{ChatConnection, Subscription};
use super::types::{ChatMessage, EventKind, InboundEvent, OutboundEvent, TypingNotice};
use crate::state::chat::{ChatState, TYPING_TIMEOUT};
use crate::state::session::Session;

/// Mirror one inbound event into chat state.
///
/// Returns the typing-expiry token when the event put up a typing label.
pub fn apply_inbound(chat: &mut ChatState, session: &Session, event: &InboundEvent) -> Option<u64> {
    match event {
        InboundEvent::ChatHistory(messages) => chat.apply_history(messages.clone()),
        InboundEvent::ReceiveMessage(message) => chat.apply_message(message.clone()),
        InboundEvent::UserTyping(notice) => return chat.typing.show(&notice.username, session.username()),
        InboundEvent::ConnectError(_) => {}
    }
    None
}

/// Build the outgoing message for `text`, or `None` when logged out or blank.
///
/// Trimming only decides whether to send; the text goes out as typed.
pub fn outbound_message(session: &Session, text: &str, time: Option<String>) -> Option<ChatMessage> {
    let Session::LoggedIn { username, avatar } = session else {
        return None;
    };
    if text.trim().is_empty() {
        return None;
    }
    Some(ChatMessage { username: username.clone(), avatar: avatar.clone(), text: text.to_owned(), time })
}

/// Send the composer draft and clear it.
///
/// A blank draft is a silent no-op and is left in place. Returns whether an
/// event was handed to the connection.
pub fn send(conn: &ChatConnection, session: &Session, chat: &mut ChatState, time: Option<String>) -> bool {
    let Some(message) = outbound_message(session, &chat.draft, time) else {
        return false;
    };
    let sent = conn.emit(&OutboundEvent::SendMessage(message));
    chat.draft.clear();
    sent
}

/// Announce that the local user is typing. Only emitted while logged in.
pub fn notify_typing(conn: &ChatConnection, session: &Session) -> bool {
    let Some(username) = session.username() else {
        return false;
    };
    conn.emit(&OutboundEvent::Typing(TypingNotice { username: username.to_owned() }))
}

pub fn connect_error_message(reason: &str) -> String {
    format!("chat socket connection error: {reason}")
}

/// Subscribe chat state to the connection.
///
/// The returned handles must be released when the owning component unmounts.
pub fn install_chat_sync(
    conn: &ChatConnection,
    session: RwSignal<Session>,
    chat: RwSignal<ChatState>,
) -> Vec<Subscription> {
    install_chat_sync_with(conn, session, chat, schedule_typing_expiry)
}

/// [`install_chat_sync`] with the typing-expiry timer supplied by the caller.
///
/// `schedule` receives every token handed out by the typing indicator and must
/// call [`expire_typing`] with it once [`TYPING_TIMEOUT`] has elapsed.
pub fn install_chat_sync_with<S>(
    conn: &ChatConnection,
    session: RwSignal<Session>,
    chat: RwSignal<ChatState>,
    schedule: S,
) -> Vec<Subscription>
where
    S: Fn(RwSignal<ChatState>, u64) + Clone + Send + Sync + 'static,
{
    let on_event = move |event: &InboundEvent| {
        let local = session.get_untracked();
        let mut token = None;
        chat.update(|c| token = apply_inbound(c, &local, event));
        if let Some(token) = token {
            schedule(chat, token);
        }
    };

    vec![
        conn.subscribe(EventKind::ChatHistory, on_event.clone()),
        conn.subscribe(EventKind::ReceiveMessage, on_event.clone()),
        conn.subscribe(EventKind::UserTyping, on_event),
        conn.subscribe(EventKind::ConnectError, |event: &InboundEvent| {
            if let InboundEvent::ConnectError(reason) = event {
                leptos::logging::warn!("{}", connect_error_message(reason));
            }
        }),
    ]
}

/// Timer callback: clear the typing label if `token` is still current.
pub fn expire_typing(chat: RwSignal<ChatState>, token: u64) {
    chat.update(|c| {
        c.typing.expire(token);
    });
}

fn schedule_typing_expiry(chat: RwSignal<ChatState>, token: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TYPING_TIMEOUT).await;
        expire_typing(chat, token);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, token);
    }
}

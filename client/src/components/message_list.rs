//! Scrolling message list with sender grouping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState::messages` exactly as received. Sender name and avatar
//! placement come from `util::grouping`; own messages get a modifier class.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::net::types::ChatMessage;
use crate::state::chat::ChatState;
use crate::state::session::Session;
use crate::util::grouping::{GroupSlot, group_slots};

#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<Session>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="message-list" node_ref=list_ref>
            {move || {
                let messages = chat.with(|c| c.messages.clone());
                if messages.is_empty() {
                    return view! { <div class="message-list__empty">"No messages yet"</div> }.into_any();
                }

                let groups = group_slots(&messages);
                let local = session.get();
                messages
                    .into_iter()
                    .zip(groups)
                    .map(|(message, group)| {
                        let own = local.is_self(&message.username);
                        view! { <MessageRow message=message group=group own=own/> }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn MessageRow(message: ChatMessage, group: GroupSlot, own: bool) -> impl IntoView {
    let ChatMessage { username, avatar, text, time } = message;
    let row_class = if own { "message message--own" } else { "message" };
    let avatar_view = group
        .show_avatar
        .then(|| view! { <Avatar username=username.clone() avatar=avatar/> });
    let name_view = group
        .show_name
        .then(|| view! { <span class="message__author">{username}</span> });

    view! {
        <div class=row_class>
            <div class="message__avatar-slot">{avatar_view}</div>
            <div class="message__bubble">
                {name_view}
                <span class="message__text">{text}</span>
                {time.map(|t| view! { <span class="message__time">{t}</span> })}
            </div>
        </div>
    }
}

//! Emoji palette popover attached to the composer.

use leptos::prelude::*;

use crate::net::chat_sync::notify_typing;
use crate::net::transport::ChatConnection;
use crate::state::chat::ChatState;
use crate::state::session::Session;
use crate::util::emoji::{EMOJI_PALETTE, append_emoji};

/// Picking an emoji appends it to the draft and counts as a composer change.
#[component]
pub fn EmojiPicker() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<Session>>();
    let conn = expect_context::<ChatConnection>();

    view! {
        <div class="emoji-picker">
            {EMOJI_PALETTE
                .iter()
                .map(|emoji| {
                    let conn = conn.clone();
                    let on_pick = move |_| {
                        chat.update(|c| c.draft = append_emoji(&c.draft, emoji));
                        notify_typing(&conn, &session.get_untracked());
                    };
                    view! {
                        <button type="button" class="emoji-picker__item" on:click=on_pick>
                            {*emoji}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

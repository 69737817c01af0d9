//! Message composer: text input, emoji toggle and send button.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::components::emoji_picker::EmojiPicker;
use crate::net::chat_sync::{notify_typing, send};
use crate::net::transport::ChatConnection;
use crate::state::chat::ChatState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::clock::now_label;

/// Plain Enter sends. Shift+Enter and keys confirming an IME composition do not.
pub fn submits_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let conn = expect_context::<ChatConnection>();

    let do_send = {
        let conn = conn.clone();
        move || {
            let session = session.get_untracked();
            chat.update(|c| {
                send(&conn, &session, c, now_label());
            });
            ui.update(UiState::close_emoji_picker);
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if submits_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        chat.update(|c| c.draft = event_target_value(&ev));
        notify_typing(&conn, &session.get_untracked());
    };

    let placeholder = move || {
        let name = session.with(|s| s.username().unwrap_or("unknown").to_owned());
        format!("Message as {name}...")
    };

    let can_send = move || chat.with(|c| !c.draft.trim().is_empty());

    view! {
        <div class="composer">
            <Show when=move || ui.with(|u| u.emoji_picker_open)>
                <EmojiPicker/>
            </Show>
            <div class="composer__row">
                <button
                    type="button"
                    class="composer__emoji-toggle"
                    on:click=move |_| ui.update(UiState::toggle_emoji_picker)
                >
                    "😊"
                </button>
                <input
                    class="composer__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary composer__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

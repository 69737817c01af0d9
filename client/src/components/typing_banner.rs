//! "Someone is typing" line under the message list.

#[cfg(test)]
#[path = "typing_banner_test.rs"]
mod typing_banner_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

pub fn typing_text(username: &str) -> String {
    format!("{username} is typing...")
}

#[component]
pub fn TypingBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let label = move || chat.with(|c| c.typing.label().map(typing_text));

    view! { <div class="typing-banner">{label}</div> }
}

//! Chat page: header, message list, typing banner and composer.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::typing_banner::TypingBanner;
use crate::state::session::Session;

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let identity = move || {
        session.with(|s| {
            let username = s.username().unwrap_or_default().to_owned();
            let avatar = s.avatar().map(str::to_owned);
            view! {
                <Avatar username=username.clone() avatar=avatar/>
                <span class="chat-header__name">{username}</span>
            }
        })
    };

    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1 class="chat-header__title">"Chat Room"</h1>
                <div class="chat-header__identity">{identity}</div>
            </header>
            <MessageList/>
            <TypingBanner/>
            <Composer/>
        </div>
    }
}

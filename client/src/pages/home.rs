//! Root route: the login form until a session exists, then the chat room.

use leptos::prelude::*;

use crate::pages::chat::ChatPage;
use crate::pages::login::LoginPage;
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <Show when=move || session.with(Session::is_logged_in) fallback=|| view! { <LoginPage/> }>
            <ChatPage/>
        </Show>
    }
}

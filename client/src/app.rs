//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::chat_sync::install_chat_sync;
use crate::net::transport::ChatConnection;
use crate::pages::home::HomePage;
use crate::state::{chat::ChatState, session::Session, session::restore_session, ui::UiState};
use crate::util::storage::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session, chat and UI state plus the chat connection, and keeps
/// chat state subscribed to the connection for the app's lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());
    let conn = connect();

    provide_context(session);
    provide_context(chat);
    provide_context(ui);
    provide_context(conn.clone());

    let subscriptions = install_chat_sync(&conn, session, chat);
    on_cleanup(move || drop(subscriptions));

    // Restore after hydration so server and client render the same markup.
    Effect::new(move || {
        session.set(restore_session(&BrowserStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chatroom.css"/>
        <Title text="Chat Room"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn connect() -> ChatConnection {
    ChatConnection::new(crate::net::socket_client::spawn_socket_client())
}

#[cfg(not(feature = "hydrate"))]
fn connect() -> ChatConnection {
    ChatConnection::offline()
}

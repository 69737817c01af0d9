//! Login page: pick a display name and an optional avatar image.

use leptos::prelude::*;

use crate::net::transport::ChatConnection;
use crate::state::session::{Session, login};
use crate::util::avatar::initial;
use crate::util::storage::BrowserStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let conn = expect_context::<ChatConnection>();
    let name = RwSignal::new(String::new());
    let avatar = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(next) = login(&BrowserStore, &conn, &name.get_untracked(), avatar.get_untracked()) {
            session.set(next);
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // A failed read clears any earlier pick.
            leptos::task::spawn_local(async move {
                avatar.set(crate::util::avatar::read_avatar(file).await);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, avatar);
        }
    };

    let preview = move || match avatar.get() {
        Some(src) => view! { <img class="login-avatar" src=src alt="avatar preview"/> }.into_any(),
        None => view! { <div class="login-avatar login-avatar--initial">{move || initial(&name.get())}</div> }
            .into_any(),
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Chat Room"</h1>
                <p class="login-card__subtitle">"Pick a name to join"</p>
                <form class="login-form" on:submit=on_submit>
                    {preview}
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="login-file">
                        "Avatar (optional)"
                        <input type="file" accept="image/*" on:change=on_file/>
                    </label>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || name.with(|n| n.trim().is_empty())
                    >
                        "Join"
                    </button>
                </form>
            </div>
        </div>
    }
}

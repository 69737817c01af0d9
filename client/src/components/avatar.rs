//! Round sender avatar: the uploaded image, or the sender's initial.

use leptos::prelude::*;

use crate::util::avatar::initial;

#[component]
pub fn Avatar(username: String, avatar: Option<String>) -> impl IntoView {
    match avatar {
        Some(src) if !src.is_empty() => view! { <img class="avatar" src=src alt=username/> }.into_any(),
        _ => view! { <div class="avatar avatar--initial">{initial(&username)}</div> }.into_any(),
    }
}

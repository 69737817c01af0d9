//! REST helpers for talking to the host that serves this app.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the runtime config is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or broken
//! config endpoint degrades to the same-origin default.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Path of the host endpoint that publishes [`ClientConfig`].
pub const CONFIG_ENDPOINT: &str = "/api/config";

/// Runtime settings the host publishes for the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the chat server (`http(s)://` or `ws(s)://`).
    pub server_url: String,
}

/// Fetch the runtime config from [`CONFIG_ENDPOINT`].
/// Returns `None` on any failure or on the server.
pub async fn fetch_client_config() -> Option<ClientConfig> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            leptos::logging::warn!("{}", config_request_failed_message(resp.status()));
            return None;
        }
        resp.json::<ClientConfig>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Pick the chat server base URL: the configured one if present, else the page origin.
pub fn resolve_server_url(config: Option<&ClientConfig>, origin: &str) -> String {
    config
        .map(|c| c.server_url.trim())
        .filter(|url| !url.is_empty())
        .unwrap_or(origin)
        .to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn config_request_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

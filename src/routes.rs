//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small host API together with Leptos SSR rendering
//! under a single Axum router. The chat traffic itself never passes through
//! here; the browser talks to the Socket.IO server named in `/api/config`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use client::net::api::{CONFIG_ENDPOINT, ClientConfig};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Shared state for the host API.
#[derive(Clone)]
pub struct AppState {
    pub client_config: ClientConfig,
}

impl AppState {
    pub fn new(config: &HostConfig) -> Self {
        Self { client_config: ClientConfig { server_url: config.server_url.clone() } }
    }
}

/// API routes served next to the SSR app.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route(CONFIG_ENDPOINT, get(client_config))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend: API routes + the server-rendered shell + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

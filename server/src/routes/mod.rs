//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON endpoints with Leptos SSR rendering under a
//! single Axum router. Compiled client assets are served under `/pkg`, and
//! anything else unmatched falls through to the public static directory.

pub mod chat;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// JSON and probe endpoints.
fn api_routes() -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/healthz", get(healthz))
}

/// Full site: API routes, Leptos SSR pages, `/pkg` assets, static fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio::app::App);
    tracing::debug!(count = routes.len(), "generated SSR route list");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let public = ServeDir::new(&config.public_dir).append_index_html_on_directories(true);

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .fallback_service(public)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

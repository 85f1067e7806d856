// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. Verbs not registered on a
//! route fall through to axum's method fallback and answer 405.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use pokedex_core::PokedexError;
use pokedex_service::PokemonService;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The reconciliation service, injected at startup.
    pub service: Arc<PokemonService>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    /// Create request state over a service.
    pub fn new(service: Arc<PokemonService>) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the application router.
///
/// Split out from [`start_server`] so tests can drive the router directly
/// with `tower::ServiceExt::oneshot`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/pokemon/",
            get(handlers::list_pokemon).post(handlers::post_pokemon),
        )
        .route(
            "/pokemon/{id}/encounters",
            get(handlers::list_encounters).post(handlers::post_encounter),
        )
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the gateway HTTP server and serve until the task is cancelled.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), PokedexError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| PokedexError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| PokedexError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

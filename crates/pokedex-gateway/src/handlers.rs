// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the Pokedex REST API.
//!
//! Bodies are read as raw bytes and parsed here rather than through the
//! `Json` extractor, so a non-JSON body answers a plain 400 with a named
//! reason instead of an extractor rejection.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use pokedex_core::{PokedexError, PokemonSummary};
use pokedex_service::validate;

use crate::server::AppState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description, naming the offending field where applicable.
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway started.
    pub uptime_secs: u64,
}

/// Map a service error onto the wire.
///
/// Conflicts never reach this point — the service resolves them internally.
fn error_response(err: PokedexError) -> Response {
    let status = match &err {
        PokedexError::NotFound { .. } => StatusCode::NOT_FOUND,
        PokedexError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        PokedexError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        PokedexError::Storage { .. } | PokedexError::Config(_) | PokedexError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        error!(error = %err, "request failed");
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Parse a request body as JSON, rejecting anything else with a 400.
fn parse_json_body(body: &Bytes) -> Result<Value, PokedexError> {
    serde_json::from_slice(body)
        .map_err(|_| PokedexError::InvalidPayload("payload must be valid JSON".to_string()))
}

/// GET /pokemon/
///
/// Every stored Pokemon as a summary (encounters omitted). An empty store
/// answers an empty array.
pub async fn list_pokemon(State(state): State<AppState>) -> Response {
    match state.service.list_all().await {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /pokemon/
///
/// Returns the stored Pokemon (200) when the name is already known, or
/// fetches it from upstream and persists it (201, empty body). 404 when
/// neither the store nor upstream has the name.
pub async fn post_pokemon(State(state): State<AppState>, body: Bytes) -> Response {
    let result = async {
        let payload = parse_json_body(&body)?;
        let name = validate::validate_name_input(&payload)?;
        state.service.resolve_or_create(&name).await
    }
    .await;

    match result {
        Ok((record, true)) => {
            info!(pokemon = %record.name, "pokemon created via api");
            StatusCode::CREATED.into_response()
        }
        Ok((record, false)) => {
            (StatusCode::OK, Json(PokemonSummary::from(record))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /pokemon/{id}/encounters
///
/// The encounter list for a stored Pokemon, oldest first. Unknown ids are
/// a terminal 404 — this route never consults upstream.
pub async fn list_encounters(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.service.list_encounters(id).await {
        Ok(encounters) => (StatusCode::OK, Json(encounters)).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /pokemon/{id}/encounters
///
/// Attach an encounter to the Pokemon with the given id, fetching the
/// Pokemon from upstream first when the store does not hold it yet.
pub async fn post_encounter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Response {
    let result = async {
        let payload = parse_json_body(&body)?;
        info!(id, %payload, "encounter posted");
        state.service.add_encounter(id, &payload).await
    }
    .await;

    match result {
        Ok(_encounter) => StatusCode::CREATED.into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /health
///
/// Unauthenticated liveness probe.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

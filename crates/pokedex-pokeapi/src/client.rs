// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the PokeAPI `/pokemon` endpoint.
//!
//! Provides [`PokeApiClient`] which handles request construction, timeouts,
//! and the classification of responses into "found", "genuinely absent",
//! and "call failed".

use std::time::Duration;

use async_trait::async_trait;
use pokedex_config::model::UpstreamConfig;
use pokedex_core::{PokedexError, UpstreamFetcher};
use tracing::debug;

/// HTTP client for PokeAPI communication.
///
/// One request per fetch, no retry or backoff here: the strict 404-vs-rest
/// classification is what makes a retry at a caller layer safe.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a new PokeAPI client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, PokedexError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PokedexError::Upstream {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl UpstreamFetcher for PokeApiClient {
    async fn fetch(&self, token: &str) -> Result<serde_json::Value, PokedexError> {
        let url = format!("{}/pokemon/{token}/", self.base_url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| PokedexError::Upstream {
                    message: format!("request to {url} failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

        let status = response.status();
        debug!(%status, token, "upstream response received");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::not_found(token));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokedexError::Upstream {
                message: format!("upstream returned {status}: {body}"),
                source: None,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| PokedexError::Upstream {
                message: format!("failed to decode upstream body: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

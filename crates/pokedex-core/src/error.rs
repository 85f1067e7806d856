// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pokedex service.

use thiserror::Error;

/// The primary error type used across the store, fetcher, and service layers.
#[derive(Debug, Error)]
pub enum PokedexError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Upstream PokeAPI failures other than a definitive 404 (unreachable host,
    /// 5xx responses, malformed payloads). Never conflated with [`Self::NotFound`].
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested Pokemon is absent from the store and, where consulted,
    /// from upstream as well.
    #[error("pokemon not found: {token}")]
    NotFound { token: String },

    /// Malformed client payload. The message names the offending field(s).
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PokedexError {
    /// Shorthand for a not-found error carrying the lookup token.
    pub fn not_found(token: impl Into<String>) -> Self {
        Self::NotFound {
            token: token.into(),
        }
    }
}

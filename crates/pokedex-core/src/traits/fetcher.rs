// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upstream fetcher trait for the external Pokemon data source.

use async_trait::async_trait;

use crate::error::PokedexError;

/// Client capability over the upstream Pokemon API.
///
/// `token` is a name or a decimal id — upstream resolves both. The raw
/// payload is returned untyped; projection to the canonical record shape
/// happens in the service layer.
///
/// Implementations must keep "genuinely absent" and "call failed" apart:
/// a 404 maps to [`PokedexError::NotFound`], everything else to
/// [`PokedexError::Upstream`], so the caller never creates a record from
/// a failed call.
#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    /// Fetch the canonical payload for a name-or-id token.
    async fn fetch(&self, token: &str) -> Result<serde_json::Value, PokedexError>;
}

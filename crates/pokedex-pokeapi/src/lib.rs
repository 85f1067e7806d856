// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PokeAPI upstream client for the Pokedex service.
//!
//! Implements [`pokedex_core::UpstreamFetcher`] over the public PokeAPI.
//! A 404 from upstream means "this Pokemon does not exist" and maps to
//! `PokedexError::NotFound`; transport failures and other status codes map
//! to `PokedexError::Upstream` so the service never mistakes an outage for
//! absence.

pub mod client;

pub use client::PokeApiClient;

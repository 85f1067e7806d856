// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Pokedex service.
//!
//! A thin axum layer over [`pokedex_service::PokemonService`]: route
//! registration, payload parsing, and the mapping from service errors to
//! status codes. All state is injected through [`server::AppState`]; there
//! are no module-level singletons.

pub mod handlers;
pub mod server;

pub use server::{AppState, ServerConfig, router, start_server};

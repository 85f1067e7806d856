// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pokedex service.
//!
//! This crate provides the error type, the domain types, and the two
//! collaborator traits ([`RecordStore`], [`UpstreamFetcher`]) the
//! reconciliation service is built against. Concrete backends live in
//! their own crates and implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PokedexError;
pub use traits::{InsertOutcome, RecordStore, UpstreamFetcher};
pub use types::{Encounter, PokemonRecord, PokemonSummary, SpriteSet};

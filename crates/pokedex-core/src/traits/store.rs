// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record store trait for persistence backends.

use async_trait::async_trait;

use crate::error::PokedexError;
use crate::types::PokemonRecord;

/// Result of an insert attempt.
///
/// A unique-index violation on `id` or `name` is not an error: two requests
/// racing to create the same Pokemon is an expected interleaving, and the
/// loser must be able to re-read and return the winner's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was written.
    Inserted,
    /// A record with the same `id` or `name` already exists.
    Conflict,
}

/// Persistence backend holding Pokemon records keyed by upstream id,
/// unique by name, each owning its embedded encounter list.
///
/// Implementations must write a record atomically: all scalar and sprite
/// fields land together or the write fails entirely.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Look up a record by exact, case-sensitive name.
    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, PokedexError>;

    /// Look up a record by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, PokedexError>;

    /// Return every stored record, ordered by id.
    async fn find_all(&self) -> Result<Vec<PokemonRecord>, PokedexError>;

    /// Insert a new record. A unique-constraint violation reports
    /// [`InsertOutcome::Conflict`] rather than an error.
    async fn insert(&self, record: &PokemonRecord) -> Result<InsertOutcome, PokedexError>;

    /// Overwrite an existing record wholesale. Used for encounter appends;
    /// the five original fields are carried through unchanged.
    async fn save(&self, record: &PokemonRecord) -> Result<(), PokedexError>;
}

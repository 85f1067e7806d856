// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the [`RecordStore`] trait.

use async_trait::async_trait;
use tracing::debug;

use pokedex_config::model::StorageConfig;
use pokedex_core::{InsertOutcome, PokedexError, PokemonRecord, RecordStore};

use crate::database::Database;
use crate::queries;

/// SQLite-backed record store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query module. Opening runs PRAGMAs and migrations.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the store at the configured path.
    pub async fn open(config: &StorageConfig) -> Result<Self, PokedexError> {
        let db = Database::open(&config.database_path).await?;
        debug!(path = %config.database_path, "SQLite store opened");
        Ok(Self { db })
    }

    /// Checkpoint the WAL and release the handle. Called on shutdown.
    pub async fn close(&self) -> Result<(), PokedexError> {
        self.db.close().await
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, PokedexError> {
        queries::pokemon::find_by_name(&self.db, name).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, PokedexError> {
        queries::pokemon::find_by_id(&self.db, id).await
    }

    async fn find_all(&self) -> Result<Vec<PokemonRecord>, PokedexError> {
        queries::pokemon::find_all(&self.db).await
    }

    async fn insert(&self, record: &PokemonRecord) -> Result<InsertOutcome, PokedexError> {
        queries::pokemon::insert(&self.db, record).await
    }

    async fn save(&self, record: &PokemonRecord) -> Result<(), PokedexError> {
        queries::pokemon::save(&self.db, record).await
    }
}

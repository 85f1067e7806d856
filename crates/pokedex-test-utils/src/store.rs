// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`RecordStore`] fake for deterministic testing.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use pokedex_core::{InsertOutcome, PokedexError, PokemonRecord, RecordStore};

/// An in-memory record store enforcing the same uniqueness contract as the
/// SQLite backend: one record per id, one per name, conflicts reported as
/// [`InsertOutcome::Conflict`].
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<BTreeMap<i64, PokemonRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// True when the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<PokemonRecord>, PokedexError> {
        let records = self.records.lock().await;
        Ok(records.values().find(|r| r.name == name).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PokemonRecord>, PokedexError> {
        let records = self.records.lock().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PokemonRecord>, PokedexError> {
        let records = self.records.lock().await;
        Ok(records.values().cloned().collect())
    }

    async fn insert(&self, record: &PokemonRecord) -> Result<InsertOutcome, PokedexError> {
        let mut records = self.records.lock().await;
        if records.contains_key(&record.id) || records.values().any(|r| r.name == record.name) {
            return Ok(InsertOutcome::Conflict);
        }
        records.insert(record.id, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn save(&self, record: &PokemonRecord) -> Result<(), PokedexError> {
        let mut records = self.records.lock().await;
        if !records.contains_key(&record.id) {
            return Err(PokedexError::Internal(format!(
                "save of id {} matched no record",
                record.id
            )));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }
}

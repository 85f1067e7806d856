// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconciliation service for the Pokedex.
//!
//! [`PokemonService`] coordinates the record store and the upstream
//! fetcher: raw lookups hit the store only, while `resolve_or_create` and
//! the implicit-create path of `add_encounter` fall back to upstream on a
//! local miss and persist what they find. A unique-constraint conflict on
//! insert means another request created the record first; the service
//! re-reads and returns the winner instead of failing.

pub mod projection;
pub mod validate;

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use pokedex_core::{
    Encounter, InsertOutcome, PokedexError, PokemonRecord, PokemonSummary, RecordStore,
    UpstreamFetcher,
};

pub use validate::EncounterInput;

/// The orchestration core: plain data operations over injected collaborators.
pub struct PokemonService {
    store: Arc<dyn RecordStore>,
    fetcher: Arc<dyn UpstreamFetcher>,
}

impl PokemonService {
    /// Create a service over the given store and fetcher.
    pub fn new(store: Arc<dyn RecordStore>, fetcher: Arc<dyn UpstreamFetcher>) -> Self {
        Self { store, fetcher }
    }

    /// Look up a record by exact name. Store only — a miss is reported to
    /// the caller verbatim; escalation to upstream is the caller's call.
    pub async fn get_by_name(&self, name: &str) -> Result<PokemonRecord, PokedexError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| PokedexError::not_found(name))
    }

    /// Look up a record by id. Store only, symmetric with name lookup.
    pub async fn get_by_id(&self, id: i64) -> Result<PokemonRecord, PokedexError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| PokedexError::not_found(id.to_string()))
    }

    /// Every stored record as a summary (encounters omitted), ordered by id.
    /// An empty store yields an empty list, never an error.
    pub async fn list_all(&self) -> Result<Vec<PokemonSummary>, PokedexError> {
        let records = self.store.find_all().await?;
        Ok(records.into_iter().map(PokemonSummary::from).collect())
    }

    /// Return the record for `name`, fetching and persisting it from
    /// upstream on a local miss. The boolean is true when this call
    /// created the record.
    ///
    /// Upstream 404 propagates as `NotFound` with no partial write; a
    /// transient upstream failure propagates as `Upstream` and never
    /// creates a record.
    pub async fn resolve_or_create(
        &self,
        name: &str,
    ) -> Result<(PokemonRecord, bool), PokedexError> {
        if let Some(existing) = self.store.find_by_name(name).await? {
            return Ok((existing, false));
        }
        self.fetch_and_insert(name).await
    }

    /// Validate an encounter payload, resolve the target record (implicitly
    /// creating it from upstream when the id is unknown locally), stamp the
    /// timestamp, append, and persist.
    pub async fn add_encounter(
        &self,
        id: i64,
        payload: &Value,
    ) -> Result<Encounter, PokedexError> {
        // Reject malformed payloads before touching the store or upstream.
        let input = validate::validate_encounter_input(payload)?;

        let mut record = match self.store.find_by_id(id).await? {
            Some(record) => record,
            None => self.fetch_and_insert(&id.to_string()).await?.0,
        };

        let encounter = Encounter {
            place: input.place,
            note: input.note,
            timestamp: chrono::Utc::now().timestamp(),
        };
        record.encounters.push(encounter.clone());
        self.store.save(&record).await?;

        info!(
            pokemon = %record.name,
            place = %encounter.place,
            "encounter recorded"
        );
        Ok(encounter)
    }

    /// The encounter list for `id`, oldest first. Store only — an unknown
    /// id is terminal here, never an upstream fetch.
    pub async fn list_encounters(&self, id: i64) -> Result<Vec<Encounter>, PokedexError> {
        Ok(self.get_by_id(id).await?.encounters)
    }

    /// Fetch `token` from upstream, project, and insert.
    ///
    /// An insert conflict means a concurrent request won the
    /// check-then-insert race; the store's uniqueness guarantee makes the
    /// re-read safe, so the loser returns the winner's record.
    async fn fetch_and_insert(
        &self,
        token: &str,
    ) -> Result<(PokemonRecord, bool), PokedexError> {
        let payload = self.fetcher.fetch(token).await?;
        let record = projection::project_record(&payload)?;

        match self.store.insert(&record).await? {
            InsertOutcome::Inserted => {
                info!(pokemon = %record.name, id = record.id, "pokemon created in the store");
                Ok((record, true))
            }
            InsertOutcome::Conflict => {
                if let Some(existing) = self.store.find_by_id(record.id).await? {
                    return Ok((existing, false));
                }
                if let Some(existing) = self.store.find_by_name(&record.name).await? {
                    return Ok((existing, false));
                }
                Err(PokedexError::Internal(format!(
                    "insert of '{}' conflicted but no existing record was found",
                    record.name
                )))
            }
        }
    }
}

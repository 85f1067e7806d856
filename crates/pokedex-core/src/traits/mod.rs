// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions for the Pokedex service.
//!
//! The reconciliation service depends only on these traits; concrete
//! backends (SQLite, PokeAPI) and test fakes implement them behind
//! `#[async_trait]` for dynamic dispatch.

pub mod fetcher;
pub mod store;

pub use fetcher::UpstreamFetcher;
pub use store::{InsertOutcome, RecordStore};

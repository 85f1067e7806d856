// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use pokedex_core::PokedexError;
use tracing::debug;

use crate::migrations;

/// Handle to the single SQLite connection.
///
/// Query modules accept `&Database` and go through [`Database::connection`];
/// tokio-rusqlite serializes all closure calls on one background thread,
/// which eliminates SQLITE_BUSY errors under concurrent access.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run
    /// pending migrations.
    pub async fn open(path: &str) -> Result<Self, PokedexError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(|e| PokedexError::Storage {
                source: Box::new(e),
            })?;

        conn.call(|conn| -> Result<(), rusqlite::Error> {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA foreign_keys = ON;",
            )?;
            migrations::run_migrations(conn)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)?;

        debug!(path, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL. Called on shutdown.
    pub async fn close(&self) -> Result<(), PokedexError> {
        self.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Convert a tokio-rusqlite error into the crate error type.
pub(crate) fn map_tr_err<E>(err: tokio_rusqlite::Error<E>) -> PokedexError
where
    E: std::error::Error + Send + Sync + 'static,
{
    PokedexError::Storage {
        source: Box::new(err),
    }
}

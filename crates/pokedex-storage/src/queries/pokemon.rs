// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pokemon record CRUD operations.

use pokedex_core::{InsertOutcome, PokedexError, PokemonRecord};
use rusqlite::params;

use crate::database::Database;

const RECORD_COLUMNS: &str = "id, name, base_experience, height, weight, sprites, encounters";

/// Map one row to a record, decoding the JSON document columns.
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<PokemonRecord> {
    let sprites_json: String = row.get(5)?;
    let encounters_json: String = row.get(6)?;
    Ok(PokemonRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        base_experience: row.get(2)?,
        height: row.get(3)?,
        weight: row.get(4)?,
        sprites: serde_json::from_str(&sprites_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?,
        encounters: serde_json::from_str(&encounters_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}

/// Get a record by exact name match.
pub async fn find_by_name(db: &Database, name: &str) -> Result<Option<PokemonRecord>, PokedexError> {
    let name = name.to_string();
    db.connection()
        .call(move |conn| -> Result<Option<PokemonRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM pokemon WHERE name = ?1"
            ))?;
            let result = stmt.query_row(params![name], row_to_record);
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a record by primary key.
pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<PokemonRecord>, PokedexError> {
    db.connection()
        .call(move |conn| -> Result<Option<PokemonRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM pokemon WHERE id = ?1"
            ))?;
            let result = stmt.query_row(params![id], row_to_record);
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List every record, ordered by id.
pub async fn find_all(db: &Database) -> Result<Vec<PokemonRecord>, PokedexError> {
    db.connection()
        .call(|conn| -> Result<Vec<PokemonRecord>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {RECORD_COLUMNS} FROM pokemon ORDER BY id"
            ))?;
            let rows = stmt.query_map([], row_to_record)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a new record.
///
/// A unique-index violation on `id` or `name` reports
/// [`InsertOutcome::Conflict`] so the caller can re-read the winner.
pub async fn insert(db: &Database, record: &PokemonRecord) -> Result<InsertOutcome, PokedexError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| -> Result<InsertOutcome, rusqlite::Error> {
            let sprites = serde_json::to_string(&record.sprites)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            let encounters = serde_json::to_string(&record.encounters)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            let result = conn.execute(
                "INSERT INTO pokemon (id, name, base_experience, height, weight, sprites, encounters)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.name,
                    record.base_experience,
                    record.height,
                    record.weight,
                    sprites,
                    encounters,
                ],
            );
            match result {
                Ok(_) => Ok(InsertOutcome::Inserted),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Ok(InsertOutcome::Conflict)
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Overwrite an existing record wholesale.
pub async fn save(db: &Database, record: &PokemonRecord) -> Result<(), PokedexError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| -> Result<(), rusqlite::Error> {
            let sprites = serde_json::to_string(&record.sprites)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            let encounters = serde_json::to_string(&record.encounters)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            let updated = conn.execute(
                "UPDATE pokemon
                 SET name = ?2, base_experience = ?3, height = ?4, weight = ?5,
                     sprites = ?6, encounters = ?7
                 WHERE id = ?1",
                params![
                    record.id,
                    record.name,
                    record.base_experience,
                    record.height,
                    record.weight,
                    sprites,
                    encounters,
                ],
            )?;
            if updated == 0 {
                return Err(rusqlite::Error::ToSqlConversionFailure(
                    format!("save of id {} matched no row", record.id).into(),
                ));
            }
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{Encounter, SpriteSet};
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_record(id: i64, name: &str) -> PokemonRecord {
        PokemonRecord {
            id,
            name: name.to_string(),
            base_experience: 58,
            height: 20,
            weight: 69,
            sprites: SpriteSet {
                front_default: Some(format!("https://example.test/{id}.png")),
                ..SpriteSet::default()
            },
            encounters: Vec::new(),
        }
    }

    #[tokio::test]
    async fn insert_and_find_roundtrips() {
        let (db, _dir) = setup_db().await;
        let record = make_record(23, "ekans");

        let outcome = insert(&db, &record).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let by_id = find_by_id(&db, 23).await.unwrap().unwrap();
        assert_eq!(by_id, record);

        let by_name = find_by_name(&db, "ekans").await.unwrap().unwrap();
        assert_eq!(by_name, record);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn find_misses_return_none() {
        let (db, _dir) = setup_db().await;
        assert!(find_by_id(&db, 99).await.unwrap().is_none());
        assert!(find_by_name(&db, "missingno").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn name_lookup_is_case_sensitive() {
        let (db, _dir) = setup_db().await;
        insert(&db, &make_record(23, "ekans")).await.unwrap();
        assert!(find_by_name(&db, "Ekans").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn find_all_orders_by_id() {
        let (db, _dir) = setup_db().await;
        insert(&db, &make_record(23, "ekans")).await.unwrap();
        insert(&db, &make_record(1, "bulbasaur")).await.unwrap();

        let all = find_all(&db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 23);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_id_reports_conflict() {
        let (db, _dir) = setup_db().await;
        insert(&db, &make_record(23, "ekans")).await.unwrap();

        let outcome = insert(&db, &make_record(23, "other")).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Conflict);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_name_reports_conflict() {
        let (db, _dir) = setup_db().await;
        insert(&db, &make_record(23, "ekans")).await.unwrap();

        let outcome = insert(&db, &make_record(24, "ekans")).await.unwrap();
        assert_eq!(outcome, InsertOutcome::Conflict);

        // The original row is untouched.
        let stored = find_by_id(&db, 23).await.unwrap().unwrap();
        assert_eq!(stored.name, "ekans");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn save_persists_appended_encounters() {
        let (db, _dir) = setup_db().await;
        let mut record = make_record(23, "ekans");
        insert(&db, &record).await.unwrap();

        record.encounters.push(Encounter {
            place: "city".to_string(),
            note: Some("near the gym".to_string()),
            timestamp: 1_700_000_000,
        });
        save(&db, &record).await.unwrap();

        let stored = find_by_id(&db, 23).await.unwrap().unwrap();
        assert_eq!(stored.encounters.len(), 1);
        assert_eq!(stored.encounters[0].place, "city");
        assert_eq!(stored.encounters[0].timestamp, 1_700_000_000);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn save_of_unknown_id_is_an_error() {
        let (db, _dir) = setup_db().await;
        let record = make_record(999, "phantom");
        assert!(save(&db, &record).await.is_err());
        db.close().await.unwrap();
    }
}

// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Projection of raw upstream payloads into the canonical record shape.
//!
//! Pure functions, no I/O. The mapping is an explicit whitelist: fields and
//! sprite slots not named here are dropped by construction, whatever else
//! upstream chooses to send.

use pokedex_core::{PokedexError, PokemonRecord, SpriteSet};
use serde_json::Value;
use thiserror::Error;

/// A payload that cannot be projected into a record.
///
/// This is an upstream-side defect (the call succeeded but the body is not
/// the shape upstream promises), so it converts into
/// [`PokedexError::Upstream`], not a client error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("upstream payload is missing field '{0}'")]
    MissingField(&'static str),
    #[error("upstream payload field '{0}' has the wrong type")]
    InvalidField(&'static str),
}

impl From<ProjectionError> for PokedexError {
    fn from(err: ProjectionError) -> Self {
        PokedexError::Upstream {
            message: err.to_string(),
            source: None,
        }
    }
}

/// Project the eight known sprite slots out of a raw `sprites` object.
///
/// Unknown slots are dropped; null or absent slots stay `None`; non-string
/// slot values are treated as absent.
pub fn project_sprites(raw: &Value) -> SpriteSet {
    let slot = |name: &str| {
        raw.get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    SpriteSet {
        back_default: slot("back_default"),
        back_female: slot("back_female"),
        back_shiny: slot("back_shiny"),
        back_shiny_female: slot("back_shiny_female"),
        front_default: slot("front_default"),
        front_female: slot("front_female"),
        front_shiny: slot("front_shiny"),
        front_shiny_female: slot("front_shiny_female"),
    }
}

/// Project a raw upstream payload into a new record with no encounters.
///
/// Extracts exactly `id`, `name`, `weight`, `height`, `base_experience`,
/// and the sprite whitelist; everything else in the payload is ignored.
pub fn project_record(raw: &Value) -> Result<PokemonRecord, ProjectionError> {
    if !raw.is_object() {
        return Err(ProjectionError::InvalidField("payload"));
    }

    let id = require_i64(raw, "id")?;
    if id <= 0 {
        return Err(ProjectionError::InvalidField("id"));
    }

    let name = require_str(raw, "name")?;
    if name.is_empty() {
        return Err(ProjectionError::InvalidField("name"));
    }

    Ok(PokemonRecord {
        id,
        name: name.to_string(),
        base_experience: require_u32(raw, "base_experience")?,
        height: require_u32(raw, "height")?,
        weight: require_u32(raw, "weight")?,
        sprites: raw
            .get("sprites")
            .map(project_sprites)
            .unwrap_or_default(),
        encounters: Vec::new(),
    })
}

fn require_i64(raw: &Value, key: &'static str) -> Result<i64, ProjectionError> {
    match raw.get(key) {
        None | Some(Value::Null) => Err(ProjectionError::MissingField(key)),
        Some(value) => value.as_i64().ok_or(ProjectionError::InvalidField(key)),
    }
}

fn require_u32(raw: &Value, key: &'static str) -> Result<u32, ProjectionError> {
    let value = require_i64(raw, key)?;
    u32::try_from(value).map_err(|_| ProjectionError::InvalidField(key))
}

fn require_str<'a>(raw: &'a Value, key: &'static str) -> Result<&'a str, ProjectionError> {
    match raw.get(key) {
        None | Some(Value::Null) => Err(ProjectionError::MissingField(key)),
        Some(value) => value.as_str().ok_or(ProjectionError::InvalidField(key)),
    }
}

// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of inbound client payloads.
//!
//! Pure functions, no I/O. Validation runs before any store or fetcher
//! call; every rejection names the offending field(s).

use pokedex_core::PokedexError;
use serde_json::Value;

/// A validated encounter payload. The timestamp is deliberately absent:
/// it is stamped by the service at append time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterInput {
    pub place: String,
    pub note: Option<String>,
}

/// Validate a `POST .../encounters` body.
///
/// Requires a JSON object with a non-empty string `place`, an optional
/// string (or null) `note`, and nothing else.
pub fn validate_encounter_input(payload: &Value) -> Result<EncounterInput, PokedexError> {
    let Some(obj) = payload.as_object() else {
        return Err(PokedexError::InvalidPayload(
            "payload must be a JSON object".to_string(),
        ));
    };

    let mut unknown: Vec<&str> = obj
        .keys()
        .map(String::as_str)
        .filter(|key| !matches!(*key, "place" | "note"))
        .collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        return Err(PokedexError::InvalidPayload(format!(
            "unrecognized field(s): {}",
            unknown.join(", ")
        )));
    }

    let place = match obj.get("place") {
        None | Some(Value::Null) => {
            return Err(PokedexError::InvalidPayload(
                "'place' is required".to_string(),
            ));
        }
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::String(_)) => {
            return Err(PokedexError::InvalidPayload(
                "'place' must not be empty".to_string(),
            ));
        }
        Some(_) => {
            return Err(PokedexError::InvalidPayload(
                "'place' must be a string".to_string(),
            ));
        }
    };

    let note = match obj.get("note") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(PokedexError::InvalidPayload(
                "'note' must be a string".to_string(),
            ));
        }
    };

    Ok(EncounterInput { place, note })
}

/// Validate a `POST /pokemon/` body, returning the requested name.
///
/// Requires a JSON object with a non-empty string `name`.
pub fn validate_name_input(payload: &Value) -> Result<String, PokedexError> {
    let Some(obj) = payload.as_object() else {
        return Err(PokedexError::InvalidPayload(
            "payload must be a JSON object".to_string(),
        ));
    };

    match obj.get("name") {
        None | Some(Value::Null) => Err(PokedexError::InvalidPayload(
            "'name' is required".to_string(),
        )),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(PokedexError::InvalidPayload(
            "'name' must not be empty".to_string(),
        )),
        Some(_) => Err(PokedexError::InvalidPayload(
            "'name' must be a string".to_string(),
        )),
    }
}

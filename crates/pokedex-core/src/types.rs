// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the store, fetcher, service, and gateway.

use serde::{Deserialize, Serialize};

/// The fixed set of sprite slots a record carries.
///
/// Upstream returns many more keys under `sprites`; only these eight survive
/// projection. Absent or null slots stay `None` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
}

impl SpriteSet {
    /// Names of the eight slots, in wire order.
    pub const SLOTS: [&'static str; 8] = [
        "back_default",
        "back_female",
        "back_shiny",
        "back_shiny_female",
        "front_default",
        "front_female",
        "front_shiny",
        "front_shiny_female",
    ];
}

/// A timestamped note of where a Pokemon was seen, owned by a record.
///
/// `timestamp` is stamped server-side at append time and is immutable;
/// clients never supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: i64,
}

/// Canonical stored representation of one Pokemon.
///
/// The five scalar/sprite fields come from upstream exactly once and never
/// change afterwards; `encounters` is the only growable part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub sprites: SpriteSet,
    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

/// A record with `encounters` omitted — the shape returned by the list and
/// lookup endpoints. Encounters are served only by the dedicated endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub sprites: SpriteSet,
}

impl From<PokemonRecord> for PokemonSummary {
    fn from(record: PokemonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            base_experience: record.base_experience,
            height: record.height,
            weight: record.weight,
            sprites: record.sprites,
        }
    }
}

impl From<&PokemonRecord> for PokemonSummary {
    fn from(record: &PokemonRecord) -> Self {
        record.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PokemonRecord {
        PokemonRecord {
            id: 23,
            name: "ekans".to_string(),
            base_experience: 58,
            height: 20,
            weight: 69,
            sprites: SpriteSet {
                front_default: Some("https://example.test/23.png".to_string()),
                ..SpriteSet::default()
            },
            encounters: vec![Encounter {
                place: "city".to_string(),
                note: None,
                timestamp: 1_700_000_000,
            }],
        }
    }

    #[test]
    fn summary_drops_encounters() {
        let record = sample_record();
        let summary = PokemonSummary::from(&record);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("encounters").is_none());
        assert_eq!(json["id"], 23);
        assert_eq!(json["name"], "ekans");
    }

    #[test]
    fn sprite_set_serializes_all_eight_slots() {
        let json = serde_json::to_value(SpriteSet::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), SpriteSet::SLOTS.len());
        for slot in SpriteSet::SLOTS {
            assert!(obj.contains_key(slot), "missing slot {slot}");
            assert!(obj[slot].is_null());
        }
    }

    #[test]
    fn encounter_omits_absent_note() {
        let encounter = Encounter {
            place: "forest".to_string(),
            note: None,
            timestamp: 1,
        };
        let json = serde_json::to_value(&encounter).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["place"], "forest");
        assert_eq!(json["timestamp"], 1);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: PokemonRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned upstream payloads, shaped like real PokeAPI responses.
//!
//! Each fixture carries fields and sprite slots the projection must drop,
//! so tests exercise the whitelist for free.

/// PokeAPI payload for ekans (id 23).
pub fn ekans() -> serde_json::Value {
    serde_json::json!({
        "id": 23,
        "name": "ekans",
        "base_experience": 58,
        "height": 20,
        "weight": 69,
        "order": 32,
        "is_default": true,
        "abilities": [
            {"ability": {"name": "intimidate"}, "is_hidden": false, "slot": 1}
        ],
        "sprites": {
            "back_default": "https://sprites.test/back/23.png",
            "back_female": null,
            "back_shiny": "https://sprites.test/back/shiny/23.png",
            "back_shiny_female": null,
            "front_default": "https://sprites.test/23.png",
            "front_female": null,
            "front_shiny": "https://sprites.test/shiny/23.png",
            "front_shiny_female": null,
            "other": {"official-artwork": {"front_default": "https://sprites.test/art/23.png"}},
            "versions": {}
        }
    })
}

/// PokeAPI payload for bulbasaur (id 1).
pub fn bulbasaur() -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": "bulbasaur",
        "base_experience": 64,
        "height": 7,
        "weight": 69,
        "order": 1,
        "sprites": {
            "back_default": "https://sprites.test/back/1.png",
            "back_female": null,
            "back_shiny": "https://sprites.test/back/shiny/1.png",
            "back_shiny_female": null,
            "front_default": "https://sprites.test/1.png",
            "front_female": null,
            "front_shiny": "https://sprites.test/shiny/1.png",
            "front_shiny_female": null
        }
    })
}

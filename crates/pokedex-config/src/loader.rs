// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./pokedex.toml` > `~/.config/pokedex/pokedex.toml`
//! > `/etc/pokedex/pokedex.toml`, with environment variable overrides via the
//! `POKEDEX_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PokedexConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pokedex/pokedex.toml` (system-wide)
/// 3. `~/.config/pokedex/pokedex.toml` (user XDG config)
/// 4. `./pokedex.toml` (local directory)
/// 5. `POKEDEX_*` environment variables
pub fn load_config() -> Result<PokedexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PokedexConfig::default()))
        .merge(Toml::file("/etc/pokedex/pokedex.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pokedex/pokedex.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pokedex.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PokedexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PokedexConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PokedexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PokedexConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay intact: `POKEDEX_STORAGE_DATABASE_PATH` must map to
/// `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("POKEDEX_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: POKEDEX_STORAGE_DATABASE_PATH -> "storage_database_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("upstream_", "upstream.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}

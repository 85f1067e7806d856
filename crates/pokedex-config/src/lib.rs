// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Pokedex service.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::PokedexConfig;

use pokedex_core::PokedexError;

/// Load configuration from the XDG hierarchy and validate it.
///
/// The high-level entry point used by the binary: loads TOML files + env
/// vars via Figment, then runs post-deserialization validation.
pub fn load_and_validate() -> Result<PokedexConfig, PokedexError> {
    let config = loader::load_config().map_err(|e| PokedexError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<PokedexConfig, PokedexError> {
    let config =
        loader::load_config_from_str(toml_content).map_err(|e| PokedexError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Post-deserialization checks Figment cannot express.
fn validate(config: &PokedexConfig) -> Result<(), PokedexError> {
    if config.upstream.base_url.is_empty() {
        return Err(PokedexError::Config(
            "upstream.base_url must not be empty".to_string(),
        ));
    }
    if config.upstream.base_url.ends_with('/') {
        return Err(PokedexError::Config(
            "upstream.base_url must not end with '/'".to_string(),
        ));
    }
    if config.upstream.timeout_secs == 0 {
        return Err(PokedexError::Config(
            "upstream.timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.storage.database_path.is_empty() {
        return Err(PokedexError::Config(
            "storage.database_path must not be empty".to_string(),
        ));
    }
    match config.log.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        other => Err(PokedexError::Config(format!(
            "log.level must be one of trace/debug/info/warn/error, got '{other}'"
        ))),
    }
}

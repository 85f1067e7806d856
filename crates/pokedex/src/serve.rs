// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pokedex serve` command implementation.
//!
//! Wires the SQLite store, the PokeAPI client, and the reconciliation
//! service into the gateway, then serves until Ctrl-C.

use std::sync::Arc;

use tracing::info;

use pokedex_config::PokedexConfig;
use pokedex_core::{PokedexError, RecordStore, UpstreamFetcher};
use pokedex_gateway::{AppState, ServerConfig};
use pokedex_pokeapi::PokeApiClient;
use pokedex_service::PokemonService;
use pokedex_storage::SqliteStore;

/// Runs the `pokedex serve` command.
pub async fn run_serve(config: PokedexConfig) -> Result<(), PokedexError> {
    init_tracing(&config.log.level);

    info!("starting pokedex serve");

    let store = Arc::new(SqliteStore::open(&config.storage).await?);
    let fetcher = Arc::new(PokeApiClient::new(&config.upstream)?);

    let service = PokemonService::new(
        Arc::clone(&store) as Arc<dyn RecordStore>,
        Arc::clone(&fetcher) as Arc<dyn UpstreamFetcher>,
    );

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    let state = AppState::new(Arc::new(service));

    tokio::select! {
        result = pokedex_gateway::start_server(&server_config, state) => {
            result?;
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    store.close().await?;
    info!("pokedex stopped");
    Ok(())
}

async fn shutdown_signal() {
    // Ignore the error case: if the signal handler cannot be installed we
    // simply serve until the process is killed.
    let _ = tokio::signal::ctrl_c().await;
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokedex={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

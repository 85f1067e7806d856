// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scriptable [`UpstreamFetcher`] fake for deterministic testing.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use pokedex_core::{PokedexError, UpstreamFetcher};

/// A mock upstream that serves pre-loaded payloads.
///
/// Each payload is registered under both its `name` and its decimal `id`,
/// matching how the real upstream resolves either token. Unknown tokens
/// yield `NotFound`; flipping [`MockFetcher::set_transient_failure`] makes
/// every call fail with an `Upstream` error instead, for outage tests.
#[derive(Clone, Default)]
pub struct MockFetcher {
    payloads: Arc<Mutex<HashMap<String, serde_json::Value>>>,
    transient_failure: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
}

impl MockFetcher {
    /// Create a mock upstream that knows no Pokemon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock upstream pre-loaded with the given payloads.
    pub fn with_pokemon(payloads: Vec<serde_json::Value>) -> Self {
        let mut map = HashMap::new();
        for payload in payloads {
            register(&mut map, payload);
        }
        Self {
            payloads: Arc::new(Mutex::new(map)),
            ..Self::default()
        }
    }

    /// Register another payload.
    pub async fn add_pokemon(&self, payload: serde_json::Value) {
        let mut map = self.payloads.lock().await;
        register(&mut map, payload);
    }

    /// Make every subsequent call fail as a transient upstream error.
    pub fn set_transient_failure(&self, failing: bool) {
        self.transient_failure.store(failing, Ordering::SeqCst);
    }

    /// Number of fetch calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn register(map: &mut HashMap<String, serde_json::Value>, payload: serde_json::Value) {
    if let Some(name) = payload.get("name").and_then(|v| v.as_str()) {
        map.insert(name.to_string(), payload.clone());
    }
    if let Some(id) = payload.get("id").and_then(|v| v.as_i64()) {
        map.insert(id.to_string(), payload);
    }
}

#[async_trait]
impl UpstreamFetcher for MockFetcher {
    async fn fetch(&self, token: &str) -> Result<serde_json::Value, PokedexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.transient_failure.load(Ordering::SeqCst) {
            return Err(PokedexError::Upstream {
                message: "mock upstream unavailable".to_string(),
                source: None,
            });
        }

        let payloads = self.payloads.lock().await;
        payloads
            .get(token)
            .cloned()
            .ok_or_else(|| PokedexError::not_found(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn serves_payload_by_name_and_id() {
        let fetcher = MockFetcher::with_pokemon(vec![fixtures::ekans()]);

        let by_name = fetcher.fetch("ekans").await.unwrap();
        assert_eq!(by_name["id"], 23);

        let by_id = fetcher.fetch("23").await.unwrap();
        assert_eq!(by_id["name"], "ekans");

        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let fetcher = MockFetcher::new();
        let err = fetcher.fetch("missingno").await.unwrap_err();
        assert!(matches!(err, PokedexError::NotFound { .. }));
    }

    #[tokio::test]
    async fn transient_failure_mode_is_not_not_found() {
        let fetcher = MockFetcher::with_pokemon(vec![fixtures::ekans()]);
        fetcher.set_transient_failure(true);

        let err = fetcher.fetch("ekans").await.unwrap_err();
        assert!(matches!(err, PokedexError::Upstream { .. }));

        fetcher.set_transient_failure(false);
        assert!(fetcher.fetch("ekans").await.is_ok());
    }
}

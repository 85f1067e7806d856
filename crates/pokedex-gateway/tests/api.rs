// SPDX-FileCopyrightText: 2026 Pokedex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the router with in-memory fakes.
//!
//! Each test builds an isolated app over a fresh MemoryStore and
//! MockFetcher; requests go through `tower::ServiceExt::oneshot`, so no
//! socket or database file is involved.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pokedex_core::RecordStore;
use pokedex_gateway::{AppState, router};
use pokedex_service::PokemonService;
use pokedex_test_utils::{MemoryStore, MockFetcher, fixtures};

fn test_app(fetcher: MockFetcher) -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let service = PokemonService::new(Arc::new(store.clone()), Arc::new(fetcher));
    let app = router(AppState::new(Arc::new(service)));
    (app, store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

fn as_json(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn get_all_pokemon_on_empty_store_returns_empty_list() {
    let (app, _store) = test_app(MockFetcher::new());

    let (status, body) = send(&app, Method::GET, "/pokemon/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn post_new_pokemon_creates_and_lists_it() {
    let (app, store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));
    assert!(store.is_empty().await);

    let (status, body) = send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty(), "creation answers an empty body");

    let (status, body) = send(&app, Method::GET, "/pokemon/", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = as_json(&body);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], 23);
    assert_eq!(listed[0]["name"], "ekans");
    assert!(listed[0].get("encounters").is_none());
}

#[tokio::test]
async fn post_existing_pokemon_returns_the_record() {
    let (app, _store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));

    send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;
    let (status, body) = send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;

    assert_eq!(status, StatusCode::OK);
    let record = as_json(&body);
    for key in ["id", "name", "base_experience", "height", "weight", "sprites"] {
        assert!(record.get(key).is_some(), "response must carry '{key}'");
    }
    assert_eq!(record["id"], 23);
    // The whitelist dropped the fixture's extra sprite slots.
    assert_eq!(record["sprites"].as_object().unwrap().len(), 8);
}

#[tokio::test]
async fn post_unknown_pokemon_returns_404_and_writes_nothing() {
    let (app, store) = test_app(MockFetcher::new());

    let (status, _body) = send(
        &app,
        Method::POST,
        "/pokemon/",
        Some(json!({"name": "doesnt_exist"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn post_pokemon_with_invalid_payload_returns_400() {
    let (app, store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));

    for payload in [
        json!({"name": 20}),
        json!({}),
        json!({"extra_field": "extra"}),
        json!("String"),
        json!(200),
    ] {
        let (status, body) = send(&app, Method::POST, "/pokemon/", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert!(as_json(&body).get("error").is_some());
    }

    // A body that is not JSON at all gets the same treatment.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/pokemon/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn upstream_outage_answers_502_not_404() {
    let fetcher = MockFetcher::with_pokemon(vec![fixtures::ekans()]);
    fetcher.set_transient_failure(true);
    let (app, store) = test_app(fetcher);

    let (status, _body) = send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(store.is_empty().await, "no record from a failed call");
}

#[tokio::test]
async fn encounter_roundtrip_for_stored_pokemon() {
    let (app, _store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));
    send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/pokemon/23/encounters",
        Some(json!({"place": "city"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/pokemon/23/encounters", None).await;
    assert_eq!(status, StatusCode::OK);
    let encounters = as_json(&body);
    assert_eq!(encounters.as_array().unwrap().len(), 1);
    assert_eq!(encounters[0]["place"], "city");
    assert!(encounters[0]["timestamp"].is_i64());
    assert!(encounters[0].get("note").is_none());
}

#[tokio::test]
async fn encounter_post_implicitly_creates_the_pokemon() {
    let (app, store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));
    assert!(store.is_empty().await);

    let (status, _body) = send(
        &app,
        Method::POST,
        "/pokemon/23/encounters",
        Some(json!({"place": "city"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = store.find_by_id(23).await.unwrap().unwrap();
    assert_eq!(stored.name, "ekans");
    assert_eq!(stored.encounters.len(), 1);
}

#[tokio::test]
async fn encounter_post_with_invalid_payload_returns_400() {
    let (app, _store) = test_app(MockFetcher::with_pokemon(vec![fixtures::ekans()]));
    send(&app, Method::POST, "/pokemon/", Some(json!({"name": "ekans"}))).await;

    for payload in [
        json!({"place": 20}),
        json!({}),
        json!({"no_place": "extra"}),
        json!("String"),
        json!(200),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/pokemon/23/encounters",
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert!(as_json(&body)["error"].is_string());
    }

    let (_, body) = send(&app, Method::GET, "/pokemon/23/encounters", None).await;
    assert_eq!(as_json(&body), json!([]));
}

#[tokio::test]
async fn encounter_routes_404_for_ids_unknown_everywhere() {
    let (app, _store) = test_app(MockFetcher::new());

    let (status, _) = send(&app, Method::GET, "/pokemon/99/encounters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/pokemon/99/encounters",
        Some(json!({"place": "city"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unregistered_verbs_answer_405() {
    let (app, _store) = test_app(MockFetcher::new());

    for (method, uri) in [
        (Method::DELETE, "/pokemon/"),
        (Method::PUT, "/pokemon/"),
        (Method::PATCH, "/pokemon/"),
        (Method::DELETE, "/pokemon/23/encounters"),
        (Method::PUT, "/pokemon/23/encounters"),
        (Method::PATCH, "/pokemon/23/encounters"),
    ] {
        let (status, _) = send(&app, method.clone(), uri, None).await;
        assert_eq!(
            status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {uri} should be rejected"
        );
    }
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _store) = test_app(MockFetcher::new());

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let health = as_json(&body);
    assert_eq!(health["status"], "ok");
    assert!(health["version"].is_string());
}

//! Integration tests for household HTTP endpoints.
//!
//! These tests exercise the full router with the in-memory storage
//! adapter: request parsing, authentication, handler dispatch, and
//! response serialization.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use umzugsplan::adapters::http::{household_routes, HouseholdAppState};
use umzugsplan::adapters::storage::InMemoryHouseholdStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> (Router, Arc<InMemoryHouseholdStore>) {
    let store = Arc::new(InMemoryHouseholdStore::new());
    let state = HouseholdAppState {
        repository: store.clone(),
        reader: store.clone(),
    };
    (household_routes(state), store)
}

fn json_request(method: &str, uri: &str, user: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-id", user)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_body(name: &str, date: &str) -> Value {
    json!({
        "name": name,
        "move_date": date,
        "household_size": 3,
        "old_address": "Hauptstraße 1, Berlin",
        "new_address": "Nebenweg 2, Hamburg",
        "members": [
            { "name": "Anna", "email": "anna@example.com" }
        ]
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn create_household_returns_201_with_body() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/households",
            "user-1",
            sample_body("Familie Müller", "2025-06-10"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Familie Müller");
    assert_eq!(body["move_date"], "2025-06-10");
    assert_eq!(body["household_size"], 3);
    assert_eq!(body["members"][0]["email"], "anna@example.com");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn create_requires_authentication_header() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/households")
                .header("content-type", "application/json")
                .body(Body::from(sample_body("Familie A", "2025-06-10").to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_rejects_malformed_move_date() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/households",
            "user-1",
            sample_body("Familie A", "10.06.2025"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_rejects_zero_household_size() {
    let (app, _store) = test_app();

    let mut body = sample_body("Familie A", "2025-06-10");
    body["household_size"] = json!(0);

    let response = app
        .oneshot(json_request("POST", "/api/households", "user-1", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_only_own_households() {
    let (app, _store) = test_app();

    for (user, name) in [("user-1", "Familie A"), ("user-1", "Familie B"), ("user-2", "Familie C")]
    {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/households",
                user,
                sample_body(name, "2025-06-10"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(empty_request("GET", "/api/households", "user-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let households = body["households"].as_array().unwrap();
    assert_eq!(households.len(), 2);
    assert_eq!(households[0]["name"], "Familie A");
    assert_eq!(households[1]["name"], "Familie B");
}

#[tokio::test]
async fn get_update_delete_round_trip() {
    let (app, _store) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/households",
            "user-1",
            sample_body("Familie A", "2025-06-10"),
        ))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Read it back
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/households/{id}"), "user-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Update with a new date
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/households/{id}"),
            "user-1",
            sample_body("Familie A (neu)", "2025-07-01"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["name"], "Familie A (neu)");
    assert_eq!(updated["move_date"], "2025-07-01");

    // Delete
    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/households/{id}"), "user-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone afterwards
    let response = app
        .oneshot(empty_request("GET", &format!("/api/households/{id}"), "user-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn foreign_household_is_not_accessible() {
    let (app, _store) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/households",
            "user-1",
            sample_body("Familie A", "2025-06-10"),
        ))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Another user cannot read, update or delete it
    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/households/{id}"), "user-2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/households/{id}"),
            "user-2",
            sample_body("Gekapert", "2025-06-10"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/api/households/{id}"), "user-2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invalid_household_id_is_rejected() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/households/not-a-uuid", "user-1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

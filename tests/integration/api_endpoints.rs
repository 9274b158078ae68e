//! Integration tests for API endpoints
//!
//! These tests verify that:
//! - All REST endpoints return correct responses and status codes
//! - Validation rejects bad names before anything is stored
//! - Listing preserves newest-first order
//! - Error payloads keep their exact shapes

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::helpers::spawn_test_api;

#[tokio::test]
async fn test_root_returns_running_message() {
    let (addr, _store) = spawn_test_api().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_create_name_trims_and_echoes() {
    let (addr, _store) = spawn_test_api().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "  Alice  "}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["message"], "name added successfully");
    // Creation responses carry no timestamp; it shows up in the listing
    assert!(body.get("createdAt").is_none());

    let listed: Value = client
        .get(format!("http://{}/api/names", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["name"], "Alice");
    assert!(listed[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_name_rejects_missing_and_empty_names() {
    let (addr, _store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    for payload in [json!({}), json!({"name": null}), json!({"name": ""}), json!({"name": "   "})] {
        let response = client
            .post(format!("http://{}/api/names", addr))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {payload} should be rejected"
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "name is required"}));
    }

    // Nothing was persisted along the way
    let listed: Value = client
        .get(format!("http://{}/api/names", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_name_rejects_names_over_the_length_bound() {
    let (addr, _store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "a".repeat(101)}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "name must not exceed 100 characters"}));

    // A name of exactly 100 characters still passes
    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "a".repeat(100)}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let (addr, _store) = spawn_test_api().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/names", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_array() {
    let (addr, _store) = spawn_test_api().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/names", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_returns_names_newest_first_with_increasing_ids() {
    let (addr, _store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    for name in ["Alice", "Bob", "Carol"] {
        let response = client
            .post(format!("http://{}/api/names", addr))
            .json(&json!({"name": name}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body: Value = client
        .get(format!("http://{}/api/names", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_health_reports_connected_database() {
    let (addr, _store) = spawn_test_api().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "OK", "database": "connected"}));
}

#[tokio::test]
async fn test_unknown_routes_return_shaped_404() {
    let (addr, _store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    for path in ["/unknown-path", "/api", "/api/names/1"] {
        let response = client
            .get(format!("http://{}{}", addr, path))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "route not found"}));
    }
}

#[tokio::test]
async fn test_unlisted_methods_on_known_paths_return_shaped_404() {
    let (addr, _store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    let attempts = [
        (reqwest::Method::DELETE, "/api/names"),
        (reqwest::Method::PUT, "/api/names"),
        (reqwest::Method::POST, "/"),
        (reqwest::Method::POST, "/api/health"),
    ];

    for (method, path) in attempts {
        let response = client
            .request(method.clone(), format!("http://{}{}", addr, path))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {path}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "route not found"}), "{method} {path}");
    }
}

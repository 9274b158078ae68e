//! Failure tests for storage outages
//!
//! These tests verify that the service degrades cleanly when the database
//! goes away:
//! - Reads and writes answer with a generic 500 body, no internals leaked
//! - The health endpoint reports the outage in its fixed shape
//! - Recovery requires no restart

use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::spawn_test_api;

#[tokio::test]
async fn test_list_answers_generic_500_while_storage_is_down() {
    let (addr, store) = spawn_test_api().await;
    store.set_available(false);

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/names", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn test_create_answers_generic_500_while_storage_is_down() {
    let (addr, store) = spawn_test_api().await;
    store.set_available(false);

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "Alice"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "internal server error"}));
}

#[tokio::test]
async fn test_health_reports_disconnected_database() {
    let (addr, store) = spawn_test_api().await;
    store.set_available(false);

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "error", "database": "disconnected"}));
}

#[tokio::test]
async fn test_service_recovers_once_storage_returns() {
    let (addr, store) = spawn_test_api().await;
    let client = reqwest::Client::new();

    // Healthy write before the outage
    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "Alice"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Outage: write rejected, nothing half-stored
    store.set_available(false);
    let response = client
        .post(format!("http://{}/api/names", addr))
        .json(&json!({"name": "Bob"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Recovery without restart: prior data intact, service answering again
    store.set_available(true);
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
    assert_eq!(names, vec!["Alice"]);

    let health = client
        .get(format!("http://{}/api/health", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

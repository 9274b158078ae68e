//! Database health endpoint

use axum::{Json, extract::State, http::StatusCode};

use crate::api::{state::ApiState, types::HealthResponse};

/// GET /api/health
///
/// Probes the storage gateway with a trivial round-trip. An unreachable
/// database is an expected answer here, not a fault, so this handler always
/// shapes a response.
pub async fn health_check(State(state): State<ApiState>) -> (StatusCode, Json<HealthResponse>) {
    if state.store.health_check().await {
        (StatusCode::OK, Json(HealthResponse::connected()))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse::disconnected()),
        )
    }
}

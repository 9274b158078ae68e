//! Root probe endpoint

use axum::Json;

use crate::api::types::RootResponse;

/// GET /
///
/// Static liveness line for humans poking the service
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "name registry API is running".to_string(),
    })
}

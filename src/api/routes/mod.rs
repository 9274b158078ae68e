//! HTTP route handlers

use crate::api::error::ApiError;

pub mod health;
pub mod names;
pub mod root;

/// Fallback handler for requests that match no route
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

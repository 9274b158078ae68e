//! Name collection endpoints

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        error::{ApiError, ApiResult},
        state::ApiState,
        types::{CreateNameRequest, CreateNameResponse},
    },
    storage::{NAME_MAX_CHARS, NameRecord},
};

/// GET /api/names
///
/// List every stored name, newest first
pub async fn list_names(State(state): State<ApiState>) -> ApiResult<Json<Vec<NameRecord>>> {
    let names = state.store.list_names().await?;

    Ok(Json(names))
}

/// POST /api/names
///
/// Validate one name and store its trimmed form
pub async fn create_name(
    State(state): State<ApiState>,
    Json(payload): Json<CreateNameRequest>,
) -> ApiResult<(StatusCode, Json<CreateNameResponse>)> {
    let name = validate_name(payload.name.as_deref())?;
    let id = state.store.insert_name(name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateNameResponse {
            message: "name added successfully".to_string(),
            id,
            name: name.to_string(),
        }),
    ))
}

/// Check an inbound name and return the trimmed form that gets stored
///
/// Emptiness is judged on the trimmed value, the length bound on the
/// untrimmed original. A padded string over the bound is rejected even when
/// its trimmed form would fit.
pub fn validate_name(raw: Option<&str>) -> Result<&str, ApiError> {
    let raw = raw.unwrap_or("");
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }

    if raw.chars().count() > NAME_MAX_CHARS {
        return Err(ApiError::Validation(format!(
            "name must not exceed {NAME_MAX_CHARS} characters"
        )));
    }

    Ok(trimmed)
}

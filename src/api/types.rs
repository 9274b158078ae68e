//! Shared API request and response types
//!
//! Centralizing these keeps serialization consistent between the handlers
//! and the integration tests, and avoids shape drift as endpoints evolve.

use serde::{Deserialize, Serialize};

/// Response for `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Request body for `POST /api/names`
///
/// `name` is optional at the decoding layer so that an absent field and an
/// explicit `null` both reach validation (which rejects them) instead of
/// failing JSON extraction with a framework-shaped error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNameRequest {
    pub name: Option<String>,
}

/// Response for a successful `POST /api/names`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNameResponse {
    pub message: String,
    pub id: i64,
    pub name: String,
}

/// Response for `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

impl HealthResponse {
    /// Payload reported while the database answers the liveness probe
    pub fn connected() -> Self {
        Self {
            status: "OK".to_string(),
            database: "connected".to_string(),
        }
    }

    /// Payload reported while the database is unreachable
    pub fn disconnected() -> Self {
        Self {
            status: "error".to_string(),
            database: "disconnected".to_string(),
        }
    }
}

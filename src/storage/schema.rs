//! Database schema and name row definitions
//!
//! The registry persists a single table, `persons`, with storage-assigned
//! `id` and `created_at` columns. The schema is ensured at startup with a
//! plain `CREATE TABLE IF NOT EXISTS`; there is no migration machinery,
//! because the schema never evolves within the scope of this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on a name, in characters, after which creation is rejected.
///
/// Matches the `VARCHAR(100)` column bound. "Characters" means Unicode
/// scalar values (`str::chars`), not bytes.
pub const NAME_MAX_CHARS: usize = 100;

/// DDL for the registry table.
///
/// `id` is assigned by the database and monotonically increasing;
/// `created_at` is set by the database at insertion time. Both are
/// immutable; no update or delete statement exists in this service.
pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS persons (
    id INT AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// A single name row stored in the database
///
/// Serialized form uses camelCase (`createdAt`) so list responses match the
/// API's logical field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Storage-assigned identifier, never reused
    pub id: i64,

    /// The stored name, trimmed before insertion
    pub name: String,

    /// When the row was inserted (always UTC)
    pub created_at: DateTime<Utc>,
}

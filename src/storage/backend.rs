//! Storage gateway trait definition
//!
//! This module defines the core `NameStore` trait that all
//! store implementations must implement.

use async_trait::async_trait;

use super::error::StorageResult;
use super::schema::NameRecord;

/// Trait for the name registry's storage gateway
///
/// Two implementations exist: `MySqlStore` for production and
/// `MemoryStore` as a substitutable fake for tests. The trait is
/// deliberately small; the registry supports exactly one insert shape
/// and one query shape.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync`; a single instance is shared
/// across all in-flight requests behind an `Arc`.
///
/// ## Error Handling
///
/// Fallible methods return `StorageResult<T>`. Implementations convert
/// driver-specific errors into `StorageError` variants; callers treat the
/// error as opaque and must not retry automatically.
#[async_trait]
pub trait NameStore: Send + Sync {
    /// Idempotently guarantee the registry table exists
    ///
    /// Safe to call on every startup regardless of prior state. A failure
    /// here must be surfaced to the caller; the process bootstrap decides
    /// whether to abort, never this layer.
    async fn ensure_schema(&self) -> StorageResult<()>;

    /// Persist one name and return the storage-assigned id
    ///
    /// `name` must already be trimmed and validated (1-100 characters);
    /// the gateway stores it as-is. `created_at` is assigned by storage
    /// and observable via [`list_names`](Self::list_names).
    async fn insert_name(&self, name: &str) -> StorageResult<i64>;

    /// Fetch all stored names, newest first
    ///
    /// Ordered by `created_at` descending with `id` descending as the
    /// tie-break, so rows created within one timestamp tick still come
    /// back in reverse creation order. An empty store yields an empty
    /// vector, not an error.
    async fn list_names(&self) -> StorageResult<Vec<NameRecord>>;

    /// Perform a trivial round-trip to confirm the store is reachable
    ///
    /// Returns `false` instead of erroring on expected unreachability, so
    /// the health endpoint can distinguish "unreachable" from "reachable
    /// but empty" without a fallible path.
    async fn health_check(&self) -> bool;
}

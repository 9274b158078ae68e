//! In-memory storage gateway (no persistence)
//!
//! This gateway keeps all name records in process memory. It's useful for:
//! - Testing handlers and routing without a database
//! - Exercising failure paths on demand via [`MemoryStore::set_available`]
//!
//! ## Limitations
//!
//! - **No persistence**: all data is lost on restart
//! - **Single process**: state is not shared across instances
//!
//! Listing order matches the MySQL gateway exactly (newest first, id as the
//! tie breaker), so tests written against this store describe the real
//! service's behavior.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::backend::NameStore;
use super::error::{StorageError, StorageResult};
use super::schema::NameRecord;

// Only built through MemoryStore::new, which starts ids at 1.
struct MemoryInner {
    next_id: i64,
    rows: Vec<NameRecord>,
}

/// In-memory storage gateway
///
/// Every operation first consults the availability switch, which defaults to
/// on. Flipping it off makes reads and writes fail the same way a lost
/// database connection would, without tearing anything down.
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
    available: AtomicBool,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                next_id: 1,
                rows: Vec::new(),
            }),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle simulated availability
    ///
    /// While unavailable, reads and writes return
    /// [`StorageError::Unavailable`] and the health check reports down.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameStore for MemoryStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        self.check_available()?;
        debug!("in-memory store: nothing to migrate");
        Ok(())
    }

    async fn insert_name(&self, name: &str) -> StorageResult<i64> {
        self.check_available()?;

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.push(NameRecord {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });

        debug!("inserted name with id {}", id);
        Ok(id)
    }

    async fn list_names(&self) -> StorageResult<Vec<NameRecord>> {
        self.check_available()?;

        let inner = self.inner.read().await;
        let mut names = inner.rows.clone();
        names.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(names)
    }

    async fn health_check(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

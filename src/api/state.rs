//! API shared state

use std::sync::Arc;

use crate::storage::NameStore;

/// Shared state passed to all API handlers
///
/// Carries the storage gateway behind a trait object so the handlers run
/// identically against MySQL in production and the in-memory store in tests.
#[derive(Clone)]
pub struct ApiState {
    /// Storage gateway for reading and writing name records
    pub store: Arc<dyn NameStore>,
}

impl ApiState {
    /// Create new state wrapping the given storage gateway
    pub fn new(store: Arc<dyn NameStore>) -> Self {
        Self { store }
    }
}

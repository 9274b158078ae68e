//! Storage gateways for name persistence
//!
//! This module provides a trait-based abstraction for persisting name
//! records.
//!
//! ## Design
//!
//! - **Trait-based**: `NameStore` allows swapping implementations
//! - **Async**: all operations are async for compatibility with Tokio
//! - **Thin**: one statement per operation, no caching layer
//!
//! ## Gateways
//!
//! - **MySQL** (production): shared connection pool, schema ensured at boot
//! - **In-Memory** (testing): no persistence, supports simulated outages
//!
//! ## Usage
//!
//! ```no_run
//! use name_registry::config::DatabaseConfig;
//! use name_registry::storage::{NameStore, mysql::MySqlStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DatabaseConfig {
//!         host: "localhost".to_string(),
//!         port: 3306,
//!         user: "registry".to_string(),
//!         password: "secret".to_string(),
//!         database: "registry".to_string(),
//!         ssl: false,
//!     };
//!     let store = MySqlStore::connect(&config).await?;
//!     store.ensure_schema().await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod memory;
pub mod mysql;
pub mod schema;

pub use backend::NameStore;
pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use mysql::MySqlStore;
pub use schema::{NAME_MAX_CHARS, NameRecord};

//! Database layer - storage trait, pool setup, and store implementations
//!
//! The HTTP layer only sees [`PostStore`]. Concrete stores:
//!
//! - [`PgPostStore`] - PostgreSQL via an sqlx pool
//! - [`MemoryPostStore`] - in-process rows, for tests and `--in-memory` runs

pub mod memory;
pub mod pool;
pub mod posts;
pub mod store;

#[cfg(test)]
pub(crate) use store::test_support;

pub use memory::MemoryPostStore;
pub use pool::{create_pool_with_options, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
pub use posts::PgPostStore;
pub use store::{DbError, PostStore};

//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings assembled from host, user, and password.
///
/// The database name is not configurable; posts always live in `blog`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
}

impl DatabaseConfig {
    pub const DATABASE_NAME: &'static str = "blog";

    /// Connect options for this config, always targeting [`Self::DATABASE_NAME`].
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(Self::DATABASE_NAME);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// Open a pool using these settings.
    pub async fn connect(&self, max_connections: u32) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(self.connect_options())
            .await
    }
}

/// Create a PostgreSQL connection pool from a full URL.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool_with_options("postgres://localhost/blog", DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

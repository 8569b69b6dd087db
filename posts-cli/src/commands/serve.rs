//! HTTP server command
//!
//! Connects to the `blog` database (or an in-memory store) and serves
//! the posts endpoint until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use posts_server::db::{create_pool_with_options, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
use posts_server::{run_server, MemoryPostStore, PgPostStore, PostStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POSTS_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Full database URL (overrides --db-host/--db-user/--db-password)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "POSTS_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep posts in memory instead of a database (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Where posts are stored
#[derive(Debug)]
enum StoreTarget {
    Memory,
    Url(String),
    Parts(DatabaseConfig),
}

impl ServeArgs {
    fn store_target(&self) -> Result<StoreTarget> {
        if self.in_memory {
            return Ok(StoreTarget::Memory);
        }

        if let Some(url) = &self.database_url {
            return Ok(StoreTarget::Url(url.clone()));
        }

        let user = self
            .db_user
            .clone()
            .context("DB_USER not set. Set via --db-user, DB_USER env, .env, or pass --database-url")?;

        Ok(StoreTarget::Parts(DatabaseConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user,
            password: self.db_password.clone(),
        }))
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn PostStore> = match args.store_target()? {
        StoreTarget::Memory => {
            tracing::warn!("Using in-memory store; posts are lost on exit");
            Arc::new(MemoryPostStore::new())
        }
        StoreTarget::Url(url) => {
            let pool = create_pool_with_options(&url, args.max_connections)
                .await
                .context("Failed to create database pool")?;
            Arc::new(PgPostStore::new(pool))
        }
        StoreTarget::Parts(config) => {
            tracing::info!(
                host = %config.host,
                port = config.port,
                database = DatabaseConfig::DATABASE_NAME,
                "Connecting to database"
            );
            let pool = config
                .connect(args.max_connections)
                .await
                .context("Failed to create database pool")?;
            Arc::new(PgPostStore::new(pool))
        }
    };

    tracing::info!("Starting posts server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

//! PostgreSQL post store
//!
//! Expects the table to exist already:
//!
//! ```sql
//! CREATE TABLE posts (
//!     id BIGSERIAL PRIMARY KEY,
//!     title TEXT NOT NULL,
//!     content TEXT NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, PostStore};
use crate::models::{NewPost, Post};

/// Post store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    /// Single INSERT ... RETURNING, no read-back query.
    async fn insert(&self, post: NewPost) -> Result<Post, DbError> {
        let row: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id::BIGINT AS id, title, content
            "#,
        )
        .bind(post.title.as_str())
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Post>, DbError> {
        // No ORDER BY: rows come back in storage order
        let rows: Vec<Post> = sqlx::query_as("SELECT id::BIGINT AS id, title, content FROM posts")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Touches the posts table, so a missing table fails the check too.
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1 FROM posts LIMIT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

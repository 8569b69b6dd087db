//! Storage seam injected into the HTTP layer

use async_trait::async_trait;

use crate::models::{NewPost, Post};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Post storage.
///
/// Implementations only ever receive validated titles; see
/// [`PostTitle`](crate::models::PostTitle).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert one row and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, DbError>;

    /// Every stored row, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Post>, DbError>;

    /// Cheap round trip proving the store can serve requests.
    async fn ping(&self) -> Result<(), DbError>;
}

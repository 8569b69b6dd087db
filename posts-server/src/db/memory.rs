//! In-process post store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, PostStore};
use crate::models::{NewPost, Post};

/// Post store holding rows in memory.
///
/// Ids start at 1 and increase with every insert, like a serial column.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    rows: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, DbError> {
        let mut rows = self.rows.write().await;
        // Rows are never deleted, so the next id is len + 1
        let row = Post {
            id: rows.len() as i64 + 1,
            title: post.title.into_string(),
            content: post.content,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Post>, DbError> {
        Ok(self.rows.read().await.clone())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

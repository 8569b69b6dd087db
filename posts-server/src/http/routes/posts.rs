//! Post endpoints
//!
//! `GET /posts` lists every stored post, `POST /posts` creates one.
//! Other methods get a JSON 405.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewPost, Post, PostTitle};

/// Create post request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Confirmation body for writes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /posts - list all posts, unordered and unpaginated
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.store.list().await?;
    tracing::debug!(count = posts.len(), "listed posts");
    Ok(Json(posts))
}

/// POST /posts - validate the title, then insert
async fn create_post(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreatePostRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let title = PostTitle::new(&req.title)?;
    let post = state
        .store
        .insert(NewPost {
            title,
            content: req.content,
        })
        .await?;

    tracing::info!(post_id = post.id, "post created");
    Ok(Json(MessageResponse {
        message: "Post created",
    }))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Post routes
///
/// `content` has no length limit, so axum's default 2 MB body cap is lifted.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/posts",
            get(list_posts)
                .post(create_post)
                .fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
}

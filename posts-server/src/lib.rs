//! posts-server: create and list blog posts over HTTP
//!
//! `POST /posts` validates a title (at most 50 characters) and inserts a
//! row; `GET /posts` returns every row as JSON. Storage sits behind the
//! [`db::PostStore`] trait and is injected at router construction.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryPostStore, PgPostStore, PostStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{NewPost, Post, PostTitle, ValidationError};

//! Domain models with validation at construction
//!
//! User input is validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod validation;

pub use post::{NewPost, Post, PostTitle, MAX_TITLE_LEN};
pub use validation::ValidationError;

//! Post entity and title validation

use serde::Serialize;

use super::ValidationError;

/// Maximum length for post titles.
///
/// Counted in characters (`char`s), not bytes: a title of 50 accented or
/// CJK characters is accepted even though its UTF-8 encoding is longer.
pub const MAX_TITLE_LEN: usize = 50;

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new title, rejecting anything longer than [`MAX_TITLE_LEN`].
    ///
    /// Length is counted in `char`s, so multi-byte text is measured the
    /// way a reader would count it. Long titles are rejected, never
    /// truncated.
    ///
    /// # Example
    /// ```
    /// use posts_server::models::PostTitle;
    ///
    /// assert!(PostTitle::new("Hello").is_ok());
    /// assert!(PostTitle::new(&"x".repeat(51)).is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "Title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Input for inserting a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: String,
}

/// Stored post row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_titles() {
        assert!(PostTitle::new("Hello").is_ok());
        assert!(PostTitle::new("").is_ok());
    }

    #[test]
    fn max_length() {
        // 50 chars should work
        let title_50 = "a".repeat(50);
        assert_eq!(PostTitle::new(&title_50).unwrap().as_str(), title_50);

        // 51 chars should fail
        let title_51 = "a".repeat(51);
        let err = PostTitle::new(&title_51).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "Title",
                max: 50
            }
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 50 two-byte chars is 100 bytes
        let title = "é".repeat(50);
        assert_eq!(title.len(), 100);
        assert!(PostTitle::new(&title).is_ok());

        assert!(PostTitle::new(&"é".repeat(51)).is_err());
    }

    #[test]
    fn post_serializes_all_columns() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "World".into(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Hello", "content": "World"})
        );
    }
}

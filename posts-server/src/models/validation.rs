//! Validation error types

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field exceeds maximum length (counted in characters)
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "Title",
            max: 50,
        };
        assert_eq!(err.to_string(), "Title exceeds 50 characters");
    }
}

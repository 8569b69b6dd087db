//! API error types with IntoResponse
//!
//! Every error becomes a JSON body of the form `{"error": "<message>"}`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Methods served on the posts endpoint, for the `Allow` header on 405s
const ALLOWED_METHODS: &str = "GET,POST";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Body is not JSON or lacks required fields (400)
    MalformedBody(String),

    /// Body could not be read at all; keeps the reader's status (e.g. 413)
    UnreadableBody { status: StatusCode, message: String },

    /// Method not served by the endpoint (405)
    MethodNotAllowed,

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", detail),
            ),
            Self::UnreadableBody { status, message } => (*status, message.clone()),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_owned(),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        let mut response = (status, Json(json!({ "error": message }))).into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }
        response
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::TooLong {
            field: "Title",
            max: 50,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Title exceeds 50 characters"})
        );
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let response = ApiError::MalformedBody("missing field `title`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid request body: missing field `title`"})
        );
    }

    #[tokio::test]
    async fn unreadable_body_keeps_status() {
        let err = ApiError::UnreadableBody {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            body_json(response).await,
            json!({"error": "length limit exceeded"})
        );
    }

    #[tokio::test]
    async fn method_not_allowed_is_405_with_allow_header() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,POST");
    }

    #[tokio::test]
    async fn database_error_hides_detail() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Internal server error"})
        );
    }
}

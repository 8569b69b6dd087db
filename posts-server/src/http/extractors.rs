//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor that ignores `Content-Type` and rejects with
/// JSON [`ApiError`]s instead of axum's plain-text rejections.
///
/// Read failures keep their own status (413 for a body over the route's
/// limit); decode failures are [`ApiError::MalformedBody`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::UnreadableBody {
                status: e.status(),
                message: e.body_text(),
            })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        Ok(Self(value))
    }
}

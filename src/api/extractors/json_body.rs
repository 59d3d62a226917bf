//! JSON body extractor with reason-payload rejections.
//!
//! Axum's stock `Json` rejection renders a plain-text body; every
//! error this API emits must be a `{"reason": ...}` object, so the
//! rejection is rewritten into an `AppError`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an application error.
///
/// # Example
///
/// ```rust,ignore
/// use atlas_api::api::extractors::JsonBody;
///
/// async fn register(JsonBody(payload): JsonBody<RegisterUser>) {
///     // payload deserialized, rejection already mapped
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}

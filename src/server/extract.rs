//! Request validation extractors.
//!
//! `ValidatedJson` checks a JSON body in two passes before the handler runs:
//! deserialization (required fields, field types, dice type set) and then the
//! declared `validator` bounds (string lengths, numeric minimums). A failure in
//! either pass rejects the request with 400 Bad Request and no store operation
//! takes place.
//!
//! `ValidatedPath` wraps `axum::extract::Path` so that a malformed path
//! identifier is answered with the same `{"error": ...}` body as any other
//! 400.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::AppError;

/// JSON body extractor that enforces the payload's declared constraints.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameter extractor answering malformed values with an `ErrorDto` body.
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ValidatedPath(value))
    }
}

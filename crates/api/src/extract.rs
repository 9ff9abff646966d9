//! Request extractors shared by the create handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use digitalpro_core::validation::validate_required;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed the required-field check.
///
/// Decoding failures become [`AppError::BadRequest`] with the decoder's
/// message; blank or missing required fields become a validation error.
/// Both are `400`, never axum's default `415`/`422`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        validate_required(&value)?;
        Ok(Self(value))
    }
}

//! JSON extractor with automatic validation via the `validator` crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs the payload's `Validate` impl.
///
/// Malformed JSON and failed validation both render as structured 400
/// responses through [`AppError`], so handlers only ever see valid payloads.
///
/// # Example
/// ```ignore
/// async fn create_product(
///     ValidatedJson(draft): ValidatedJson<ProductDraft>,
/// ) -> CatalogResult<impl IntoResponse> { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection).into_response())?;

        data.validate()
            .map_err(|errors| AppError::from(errors).into_response())?;

        Ok(ValidatedJson(data))
    }
}

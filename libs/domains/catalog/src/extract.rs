//! Domain-specific request extractors.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;

use crate::models::{PRODUCT_ID_MAX, PRODUCT_ID_MIN};

/// Path extractor for product ids.
///
/// Parses the `{id}` segment and rejects anything outside the allocator's
/// range [100000, 999999] with a structured 400, so handlers and the core
/// only ever see ids that could exist.
///
/// # Example
/// ```ignore
/// async fn get_product(ProductIdPath(id): ProductIdPath) -> CatalogResult<Json<Product>> {
///     /* id is already range-checked */
/// }
/// ```
pub struct ProductIdPath(pub i32);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        let id: i32 = raw.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid product id: {}", raw)).into_response()
        })?;

        if !(PRODUCT_ID_MIN..=PRODUCT_ID_MAX).contains(&id) {
            return Err(AppError::BadRequest(format!(
                "Product id must be between {} and {}",
                PRODUCT_ID_MIN, PRODUCT_ID_MAX
            ))
            .into_response());
        }

        Ok(ProductIdPath(id))
    }
}

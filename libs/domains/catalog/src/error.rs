use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("Product id tracker is not initialized")]
    TrackerNotInitialized,

    #[error("Product id range is exhausted")]
    RangeExhausted,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Map domain errors onto the shared HTTP error surface.
///
/// Exhaustion is a 409: the request was well-formed but the id space cannot
/// satisfy it. A missing tracker is a 503: the service is misprovisioned and
/// no create can succeed until the seed row exists.
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            CatalogError::TrackerNotInitialized => {
                AppError::ServiceUnavailable("Product id tracker is not initialized".to_string())
            }
            CatalogError::RangeExhausted => {
                AppError::Conflict("Product id range is exhausted".to_string())
            }
            CatalogError::Conflict(msg) => AppError::Conflict(msg),
            CatalogError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Storage faults are logged once here, where they are classified, and then
/// re-signaled without downgrading.
impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        tracing::error!(error = %err, "Catalog storage failure");
        CatalogError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: CatalogError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            status_of(CatalogError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            status_of(CatalogError::NotFound(100_001)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn range_exhausted_maps_to_409() {
        assert_eq!(status_of(CatalogError::RangeExhausted), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_tracker_maps_to_503() {
        assert_eq!(
            status_of(CatalogError::TrackerNotInitialized),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn storage_maps_to_500() {
        assert_eq!(
            status_of(CatalogError::Storage("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

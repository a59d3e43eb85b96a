pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response body.
///
/// Every error leaving a service renders as this structure:
/// - `code`: integer error code for logging/monitoring (e.g. 1001)
/// - `error`: machine-readable identifier (e.g. `"VALIDATION_ERROR"`)
/// - `message`: human-readable message
/// - `details`: optional structured details (e.g. per-field validation errors)
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type that converts into an HTTP response.
///
/// Integrates the error types the handler stack actually produces; domain
/// crates convert their own taxonomies into this one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Flatten `validator` errors into a `{field: [errors]}` JSON object.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let map = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<serde_json::Value> = errs
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = ErrorCode::SerdeJsonError.code(), "JSON parsing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DatabaseError,
                    ErrorCode::DatabaseError.default_message().to_string(),
                    None,
                )
            }
            AppError::Io(e) => {
                tracing::error!(error_code = ErrorCode::IoError.code(), "I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::IoError,
                    ErrorCode::IoError.default_message().to_string(),
                    None,
                )
            }
            AppError::JsonExtractorRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidJson,
                rejection.body_text(),
                None,
            ),
            AppError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                ErrorCode::ValidationError.default_message().to_string(),
                Some(validation_details(&errors)),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, message, None)
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, message, None)
            }
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, ErrorCode::Conflict, message, None)
            }
            AppError::InternalServerError(message) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
            AppError::ServiceUnavailable(message) => {
                tracing::error!(error_code = ErrorCode::ServiceUnavailable.code(), "Service unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable,
                    message,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

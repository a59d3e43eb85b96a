//! Stable error codes for API responses.
//!
//! Single source of truth for the `code`/`error` pair carried by every
//! [`super::ErrorResponse`]: a string identifier for clients, an integer
//! code for monitoring, and a default message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
///
/// Client errors live in the 1000s, database errors in the 2000s, I/O in the
/// 4000s, serialization in the 5000s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request validation failed
    ValidationError,

    /// Malformed or out-of-range request parameter
    BadRequest,

    /// Invalid JSON in the request body
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// An unexpected internal error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    /// Database connection or query error
    DatabaseError,

    /// File system I/O error
    IoError,

    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// String identifier, as serialized for clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::BadRequest => 1002,
            ErrorCode::InvalidJson => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1005,
            ErrorCode::Conflict => 1008,
            ErrorCode::ServiceUnavailable => 1009,
            ErrorCode::DatabaseError => 2003,
            ErrorCode::IoError => 4001,
            ErrorCode::SerdeJsonError => 5001,
        }
    }

    /// Default human-readable message.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::BadRequest => "Malformed request parameter",
            ErrorCode::InvalidJson => "Invalid JSON format",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::Conflict => "Request conflicts with current resource state",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::ServiceUnavailable => "Service is temporarily unavailable",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::IoError => "An I/O error occurred",
            ErrorCode::SerdeJsonError => "JSON serialization error",
        }
    }
}

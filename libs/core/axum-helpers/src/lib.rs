//! # Axum Helpers
//!
//! Shared HTTP plumbing for the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses with stable error codes
//! - **[`extractors`]**: custom extractors (validated JSON)
//! - **[`http`]**: middleware (CORS, security headers)
//! - **[`server`]**: router bootstrap with OpenAPI UIs, health endpoints,
//!   graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), timeout, cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export server helpers
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

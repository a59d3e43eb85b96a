//! Server infrastructure module.
//!
//! - Router bootstrap with OpenAPI documentation UIs
//! - Health and readiness plumbing
//! - Graceful shutdown with a cleanup hook

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{health_router, run_health_checks, HealthCheckFuture, HealthResponse};
pub use shutdown::shutdown_signal;

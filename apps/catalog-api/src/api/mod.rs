//! API routes module.

pub mod health;

use axum::Router;
use domain_catalog::{handlers, CatalogService, PgCatalogStore};

use crate::state::AppState;

/// Create all API routes.
pub fn routes(state: &AppState) -> Router {
    let service = CatalogService::new(PgCatalogStore::new(state.db.clone()));

    Router::new()
        .nest("/products", handlers::router(service))
        .merge(health::router(state.clone()))
}

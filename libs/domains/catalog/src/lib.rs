//! Catalog Domain
//!
//! Product catalog with allocator-issued sequential ids and a lost-update-safe
//! stock ledger, persisted in PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  ← HTTP endpoints, request validation
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Service    │  ← orchestration: create/read/update/delete/adjust
//! └──┬───────┬───┘
//!    │       │
//! ┌──▼───┐ ┌─▼────────┐
//! │ IdAl-│ │  Stock   │  ← the two concurrency-critical components
//! │locator│ │  Ledger  │
//! └──┬───┘ └─┬────────┘
//!    │       │
//! ┌──▼───────▼───┐
//! │ CatalogStore │  ← storage port (trait + Postgres / in-memory impls)
//! └──────────────┘
//! ```
//!
//! Ids come from a single persisted counter advanced one step per create,
//! bounded to [100000, 999999]; stock deltas apply as atomic increments.
//! Both rely on the store serializing the read-modify-write, never on
//! in-process locks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, postgres::PgCatalogStore, service::CatalogService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sea_orm::Database::connect("postgres://localhost/catalog").await?;
//! let service = CatalogService::new(PgCatalogStore::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod id_allocator;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod stock;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use extract::ProductIdPath;
pub use handlers::ApiDoc;
pub use id_allocator::IdAllocator;
pub use models::{
    IdTracker, Product, ProductDraft, StockAdjustment, PRODUCT_ID_MAX, PRODUCT_ID_MIN,
    STOCK_ADJUST_MAX, TRACKER_ID, TRACKER_SEED,
};
pub use postgres::PgCatalogStore;
pub use repository::{CatalogStore, InMemoryCatalogStore};
pub use service::CatalogService;
pub use stock::StockLedger;

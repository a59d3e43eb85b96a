use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{IdTracker, Product, TRACKER_ID, TRACKER_SEED};

/// Storage port for the catalog.
///
/// Implementations persist two record kinds, products and the singleton id
/// tracker. The two mutating hot paths carry an atomicity contract the rest
/// of the crate depends on:
///
/// - [`adjust_quantity`](CatalogStore::adjust_quantity) applies its delta as
///   one indivisible read-modify-write per product row. Two concurrent
///   adjustments to the same product must both land (no lost update).
/// - [`advance_tracker`](CatalogStore::advance_tracker) increments the
///   tracker by exactly one, only if it is still below the ceiling, as one
///   indivisible conditional step. Two concurrent callers must observe
///   distinct results.
///
/// Both are single conditional `UPDATE … RETURNING` statements in the
/// Postgres implementation, so the row lock is held for the statement only
/// and released on every exit path, cancellation included.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch a product by id.
    async fn get_product(&self, id: i32) -> CatalogResult<Option<Product>>;

    /// List all products, ordered by id.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// Insert a product under its pre-assigned id.
    ///
    /// Fails with `Conflict` if the id is already present.
    async fn insert_product(&self, product: Product) -> CatalogResult<Product>;

    /// Overwrite every mutable field of an existing product.
    ///
    /// Fails with `NotFound` if no row matches the product's id.
    async fn update_product(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product. Returns whether a row existed.
    async fn delete_product(&self, id: i32) -> CatalogResult<bool>;

    /// Atomically apply a signed delta to a product's quantity.
    ///
    /// Returns the updated product, or `None` if the id is unknown. The
    /// resulting quantity is not floored at zero.
    async fn adjust_quantity(&self, id: i32, delta: i32) -> CatalogResult<Option<Product>>;

    /// Read the singleton tracker row.
    async fn get_tracker(&self) -> CatalogResult<Option<IdTracker>>;

    /// Atomically advance the tracker by one, if `last_id < ceiling`.
    ///
    /// Returns the advanced `last_id`, or `None` when the row is absent or
    /// already at (or beyond) the ceiling. The caller distinguishes the two
    /// with [`get_tracker`](CatalogStore::get_tracker).
    async fn advance_tracker(&self, ceiling: i32) -> CatalogResult<Option<i32>>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    products: HashMap<i32, Product>,
    tracker: Option<IdTracker>,
}

/// In-memory implementation of [`CatalogStore`] for development and tests.
///
/// Every mutation runs under a single write guard, so each operation is
/// linearizable with respect to the others, matching the atomicity contract
/// the Postgres implementation gets from per-statement row locks.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryCatalogStore {
    /// An empty store with no tracker row (unprovisioned).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose tracker is seeded at `last_id = 99999`.
    pub fn seeded() -> Self {
        Self::with_tracker(TRACKER_SEED)
    }

    /// A store whose tracker starts at the given `last_id`.
    pub fn with_tracker(last_id: i32) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState {
                products: HashMap::new(),
                tracker: Some(IdTracker {
                    id: TRACKER_ID,
                    last_id,
                }),
            })),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn get_product(&self, id: i32) -> CatalogResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let state = self.state.read().await;
        let mut products: Vec<Product> = state.products.values().cloned().collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    async fn insert_product(&self, product: Product) -> CatalogResult<Product> {
        let mut state = self.state.write().await;

        if state.products.contains_key(&product.id) {
            return Err(CatalogError::Conflict(format!(
                "Product {} already exists",
                product.id
            )));
        }

        state.products.insert(product.id, product.clone());
        tracing::debug!(product_id = product.id, "Inserted product");
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> CatalogResult<Product> {
        let mut state = self.state.write().await;

        if !state.products.contains_key(&product.id) {
            return Err(CatalogError::NotFound(product.id));
        }

        state.products.insert(product.id, product.clone());
        tracing::debug!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.products.remove(&id).is_some())
    }

    async fn adjust_quantity(&self, id: i32, delta: i32) -> CatalogResult<Option<Product>> {
        let mut state = self.state.write().await;

        match state.products.get_mut(&id) {
            Some(product) => {
                product.quantity += delta;
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn get_tracker(&self) -> CatalogResult<Option<IdTracker>> {
        let state = self.state.read().await;
        Ok(state.tracker)
    }

    async fn advance_tracker(&self, ceiling: i32) -> CatalogResult<Option<i32>> {
        let mut state = self.state.write().await;

        match state.tracker.as_mut() {
            Some(tracker) if tracker.last_id < ceiling => {
                tracker.last_id += 1;
                Ok(Some(tracker.last_id))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PRODUCT_ID_MAX;
    use rust_decimal::Decimal;

    fn product(id: i32, quantity: i32) -> Product {
        Product {
            id,
            name: format!("product-{}", id),
            quantity,
            price: Decimal::new(1999, 2),
            description: None,
        }
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = InMemoryCatalogStore::new();

        store.insert_product(product(100_001, 5)).await.unwrap();
        let fetched = store.get_product(100_001).await.unwrap().unwrap();
        assert_eq!(fetched.quantity, 5);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = InMemoryCatalogStore::new();

        store.insert_product(product(100_001, 5)).await.unwrap();
        let err = store.insert_product(product(100_001, 9)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let store = InMemoryCatalogStore::new();

        let err = store.update_product(product(100_001, 5)).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(100_001)));
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let store = InMemoryCatalogStore::new();

        store.insert_product(product(100_003, 1)).await.unwrap();
        store.insert_product(product(100_001, 1)).await.unwrap();

        let products = store.list_products().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![100_001, 100_003]);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let store = InMemoryCatalogStore::new();

        store.insert_product(product(100_001, 5)).await.unwrap();
        assert!(store.delete_product(100_001).await.unwrap());
        assert!(!store.delete_product(100_001).await.unwrap());
    }

    #[tokio::test]
    async fn adjust_quantity_on_missing_product_returns_none() {
        let store = InMemoryCatalogStore::new();
        assert!(store.adjust_quantity(100_001, 5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn adjust_quantity_applies_signed_deltas() {
        let store = InMemoryCatalogStore::new();
        store.insert_product(product(100_001, 10)).await.unwrap();

        let up = store.adjust_quantity(100_001, 5).await.unwrap().unwrap();
        assert_eq!(up.quantity, 15);

        let down = store.adjust_quantity(100_001, -20).await.unwrap().unwrap();
        assert_eq!(down.quantity, -5);
    }

    #[tokio::test]
    async fn seeded_tracker_advances_one_at_a_time() {
        let store = InMemoryCatalogStore::seeded();

        assert_eq!(
            store.advance_tracker(PRODUCT_ID_MAX).await.unwrap(),
            Some(100_000)
        );
        assert_eq!(
            store.advance_tracker(PRODUCT_ID_MAX).await.unwrap(),
            Some(100_001)
        );
        assert_eq!(
            store.get_tracker().await.unwrap().unwrap().last_id,
            100_001
        );
    }

    #[tokio::test]
    async fn tracker_at_ceiling_does_not_advance() {
        let store = InMemoryCatalogStore::with_tracker(PRODUCT_ID_MAX);

        assert_eq!(store.advance_tracker(PRODUCT_ID_MAX).await.unwrap(), None);
        assert_eq!(
            store.get_tracker().await.unwrap().unwrap().last_id,
            PRODUCT_ID_MAX
        );
    }

    #[tokio::test]
    async fn unprovisioned_store_has_no_tracker() {
        let store = InMemoryCatalogStore::new();
        assert!(store.get_tracker().await.unwrap().is_none());
        assert_eq!(store.advance_tracker(PRODUCT_ID_MAX).await.unwrap(), None);
    }
}

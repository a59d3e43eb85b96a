//! Stock-quantity ledger.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::repository::CatalogStore;

/// Applies signed quantity deltas to a product's stock.
///
/// Each adjustment rides the storage port's atomic increment, so concurrent
/// adjustments to the same product all land: the final quantity is the
/// initial value plus the sum of the deltas, never a lost update.
///
/// Decrements are not floored: the quantity can go negative, which reads as
/// oversold stock. The boundary validates the adjustment magnitude, not the
/// resulting level.
pub struct StockLedger<S> {
    store: Arc<S>,
}

impl<S: CatalogStore> StockLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Apply a signed delta and return the updated quantity.
    ///
    /// Fails with [`CatalogError::NotFound`] when the product is unknown.
    #[instrument(skip(self))]
    pub async fn adjust(&self, product_id: i32, delta: i32) -> CatalogResult<i32> {
        match self.store.adjust_quantity(product_id, delta).await? {
            Some(product) => {
                tracing::debug!(
                    product_id,
                    delta,
                    quantity = product.quantity,
                    "Adjusted stock"
                );
                Ok(product.quantity)
            }
            None => Err(CatalogError::NotFound(product_id)),
        }
    }

    /// Add `quantity` units of stock. `quantity` must be positive.
    pub async fn increment(&self, product_id: i32, quantity: i32) -> CatalogResult<i32> {
        self.adjust(product_id, quantity).await
    }

    /// Remove `quantity` units of stock. `quantity` must be positive.
    pub async fn decrement(&self, product_id: i32, quantity: i32) -> CatalogResult<i32> {
        self.adjust(product_id, -quantity).await
    }
}

impl<S> Clone for StockLedger<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::repository::InMemoryCatalogStore;
    use rust_decimal::Decimal;

    async fn store_with_product(id: i32, quantity: i32) -> Arc<InMemoryCatalogStore> {
        let store = Arc::new(InMemoryCatalogStore::new());
        store
            .insert_product(Product {
                id,
                name: format!("product-{}", id),
                quantity,
                price: Decimal::new(4999, 2),
                description: None,
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn increment_then_decrement_restores_the_quantity() {
        let store = store_with_product(100_001, 10).await;
        let ledger = StockLedger::new(store.clone());

        ledger.increment(100_001, 7).await.unwrap();
        ledger.decrement(100_001, 7).await.unwrap();

        let product = store.get_product(100_001).await.unwrap().unwrap();
        assert_eq!(product.quantity, 10);
    }

    #[tokio::test]
    async fn decrement_below_zero_goes_negative() {
        let ledger = StockLedger::new(store_with_product(100_001, 10).await);

        assert_eq!(ledger.increment(100_001, 5).await.unwrap(), 15);
        assert_eq!(ledger.decrement(100_001, 20).await.unwrap(), -5);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let ledger = StockLedger::new(Arc::new(InMemoryCatalogStore::new()));

        let err = ledger.increment(100_001, 5).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(100_001)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adjustments_are_never_lost() {
        let store = store_with_product(100_001, 100).await;
        let ledger = StockLedger::new(store.clone());

        // 30 increments of 3 and 30 decrements of 2: net +30.
        let mut handles = Vec::new();
        for _ in 0..30 {
            let up = ledger.clone();
            handles.push(tokio::spawn(async move {
                up.increment(100_001, 3).await.unwrap()
            }));
            let down = ledger.clone();
            handles.push(tokio::spawn(async move {
                down.decrement(100_001, 2).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let product = store.get_product(100_001).await.unwrap().unwrap();
        assert_eq!(product.quantity, 130);
    }

    #[tokio::test]
    async fn adjustments_to_different_products_are_independent() {
        let store = store_with_product(100_001, 10).await;
        store
            .insert_product(Product {
                id: 100_002,
                name: "product-100002".to_string(),
                quantity: 20,
                price: Decimal::new(999, 2),
                description: None,
            })
            .await
            .unwrap();
        let ledger = StockLedger::new(store.clone());

        ledger.increment(100_001, 1).await.unwrap();
        ledger.decrement(100_002, 1).await.unwrap();

        assert_eq!(
            store.get_product(100_001).await.unwrap().unwrap().quantity,
            11
        );
        assert_eq!(
            store.get_product(100_002).await.unwrap().unwrap().quantity,
            19
        );
    }
}

//! Catalog service - orchestrates the allocator, ledger, and storage port.

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::id_allocator::IdAllocator;
use crate::models::{Product, ProductDraft, StockAdjustment};
use crate::repository::CatalogStore;
use crate::stock::StockLedger;

/// Business-logic layer over the storage port.
///
/// Composes the id allocator and stock ledger with plain CRUD. Validation
/// happens here before anything touches storage; domain errors pass through
/// unswallowed.
pub struct CatalogService<S> {
    store: Arc<S>,
    ids: IdAllocator<S>,
    stock: StockLedger<S>,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        let store = Arc::new(store);
        Self {
            ids: IdAllocator::new(Arc::clone(&store)),
            stock: StockLedger::new(Arc::clone(&store)),
            store,
        }
    }

    /// Create a product under a freshly allocated id.
    ///
    /// The allocation commits independently of the insert: if the insert
    /// fails afterwards, the id stays consumed and is never handed out
    /// again.
    #[instrument(skip(self, draft), fields(product_name = %draft.name))]
    pub async fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        draft
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let id = self.ids.allocate().await?;
        let product = self.store.insert_product(Product::from_draft(id, draft)).await?;

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    /// Fetch a product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> CatalogResult<Product> {
        self.store
            .get_product(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// List all products.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.store.list_products().await
    }

    /// Overwrite every mutable field of an existing product; the id is kept.
    ///
    /// Signals `NotFound` for an unknown id, matching delete.
    #[instrument(skip(self, draft))]
    pub async fn update_product(&self, id: i32, draft: ProductDraft) -> CatalogResult<Product> {
        draft
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.store
            .get_product(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        let updated = self
            .store
            .update_product(Product::from_draft(id, draft))
            .await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    /// Delete a product. Signals `NotFound` for an unknown id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> CatalogResult<()> {
        if !self.store.delete_product(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    /// Add stock to a product. Returns the updated quantity.
    #[instrument(skip(self, adjustment), fields(quantity = adjustment.quantity))]
    pub async fn increment_stock(
        &self,
        id: i32,
        adjustment: StockAdjustment,
    ) -> CatalogResult<i32> {
        adjustment
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.stock.increment(id, adjustment.quantity).await
    }

    /// Remove stock from a product. Returns the updated quantity, which may
    /// be negative.
    #[instrument(skip(self, adjustment), fields(quantity = adjustment.quantity))]
    pub async fn decrement_stock(
        &self,
        id: i32,
        adjustment: StockAdjustment,
    ) -> CatalogResult<i32> {
        adjustment
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.stock.decrement(id, adjustment.quantity).await
    }
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            ids: self.ids.clone(),
            stock: self.stock.clone(),
        }
    }
}

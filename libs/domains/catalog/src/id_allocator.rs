//! Transactional allocator for product identifiers.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::PRODUCT_ID_MAX;
use crate::repository::CatalogStore;

/// Issues globally-unique, strictly increasing product ids from the bounded
/// range [100000, 999999].
///
/// Each allocation is a single conditional advance of the persisted tracker,
/// serialized by the storage layer, so N concurrent callers always receive N
/// distinct consecutive ids. A successfully allocated id stays consumed even
/// if the caller's follow-up work fails: the sequence is gap-tolerant and
/// never reuses a value.
pub struct IdAllocator<S> {
    store: Arc<S>,
}

impl<S: CatalogStore> IdAllocator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Allocate the next product id.
    ///
    /// Fails with [`CatalogError::TrackerNotInitialized`] when the tracker
    /// row is missing (a provisioning fault) and with
    /// [`CatalogError::RangeExhausted`] once `last_id` has reached 999999.
    /// Neither failure mutates the tracker.
    #[instrument(skip(self))]
    pub async fn allocate(&self) -> CatalogResult<i32> {
        if let Some(id) = self.store.advance_tracker(PRODUCT_ID_MAX).await? {
            tracing::debug!(product_id = id, "Allocated product id");
            return Ok(id);
        }

        // The conditional advance did not match a row. last_id only ever
        // grows, so if the row exists now, the range is spent.
        match self.store.get_tracker().await? {
            None => Err(CatalogError::TrackerNotInitialized),
            Some(tracker) => {
                debug_assert!(!tracker.has_capacity());
                Err(CatalogError::RangeExhausted)
            }
        }
    }
}

impl<S> Clone for IdAllocator<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

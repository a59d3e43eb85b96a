//! Integration tests driving `PgCatalogStore` against a real Postgres
//! container, covering the allocator and ledger concurrency properties.

use std::collections::HashSet;

use domain_catalog::{
    CatalogError, CatalogService, CatalogStore, PgCatalogStore, ProductDraft, StockAdjustment,
    PRODUCT_ID_MAX,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DbBackend, Statement};
use test_utils::{TestDatabase, TestDataBuilder};

fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        quantity: 10,
        price: Decimal::new(129_999, 2),
        description: Some("integration fixture".to_string()),
    }
}

async fn service_on(db: &TestDatabase) -> CatalogService<PgCatalogStore> {
    CatalogService::new(PgCatalogStore::new(db.connection()))
}

#[tokio::test]
async fn first_allocation_returns_the_floor() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let product = service.create_product(draft("first")).await.unwrap();
    assert_eq!(product.id, 100_000);

    let store = PgCatalogStore::new(db.connection());
    let tracker = store.get_tracker().await.unwrap().unwrap();
    assert_eq!(tracker.last_id, 100_000);
}

#[tokio::test]
async fn crud_round_trip() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;
    let builder = TestDataBuilder::from_test_name("crud_round_trip");

    let created = service
        .create_product(draft(&builder.product_name("scope")))
        .await
        .unwrap();

    let fetched = service.get_product(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut replacement = draft("renamed scope");
    replacement.quantity = 42;
    let updated = service
        .update_product(created.id, replacement)
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.quantity, 42);

    service.delete_product(created.id).await.unwrap();
    let err = service.get_product(created.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn delete_missing_product_signals_not_found_and_changes_nothing() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    service.create_product(draft("survivor")).await.unwrap();

    let err = service.delete_product(100_123).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(100_123)));
    assert_eq!(service.list_products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_missing_product_signals_not_found() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let err = service
        .update_product(100_123, draft("ghost"))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(100_123)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_allocate_distinct_contiguous_ids() {
    const CALLERS: i32 = 20;

    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_product(draft(&format!("concurrent-{}", i)))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id allocated");
    }

    let expected: HashSet<i32> = (100_000..100_000 + CALLERS).collect();
    assert_eq!(ids, expected);

    let store = PgCatalogStore::new(db.connection());
    let tracker = store.get_tracker().await.unwrap().unwrap();
    assert_eq!(tracker.last_id, 100_000 + CALLERS - 1);
}

#[tokio::test]
async fn exhausted_tracker_rejects_creates_without_moving() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    db.connection
        .execute_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "UPDATE product_id_trackers SET last_id = $1 WHERE id = 1",
            [PRODUCT_ID_MAX.into()],
        ))
        .await
        .unwrap();

    let err = service.create_product(draft("too late")).await.unwrap_err();
    assert!(matches!(err, CatalogError::RangeExhausted));

    let store = PgCatalogStore::new(db.connection());
    let tracker = store.get_tracker().await.unwrap().unwrap();
    assert_eq!(tracker.last_id, PRODUCT_ID_MAX);
}

#[tokio::test]
async fn missing_tracker_row_is_a_provisioning_fault() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    db.connection
        .execute_raw(Statement::from_string(
            DbBackend::Postgres,
            "DELETE FROM product_id_trackers".to_owned(),
        ))
        .await
        .unwrap();

    let err = service.create_product(draft("orphan")).await.unwrap_err();
    assert!(matches!(err, CatalogError::TrackerNotInitialized));
}

#[tokio::test]
async fn stock_increment_then_decrement_restores_quantity() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let product = service.create_product(draft("stocked")).await.unwrap();

    service
        .increment_stock(product.id, StockAdjustment { quantity: 5 })
        .await
        .unwrap();
    let after = service
        .decrement_stock(product.id, StockAdjustment { quantity: 5 })
        .await
        .unwrap();

    assert_eq!(after, product.quantity);
}

#[tokio::test]
async fn decrement_past_zero_reads_negative() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let product = service.create_product(draft("oversold")).await.unwrap();
    assert_eq!(product.quantity, 10);

    let up = service
        .increment_stock(product.id, StockAdjustment { quantity: 5 })
        .await
        .unwrap();
    assert_eq!(up, 15);

    let down = service
        .decrement_stock(product.id, StockAdjustment { quantity: 20 })
        .await
        .unwrap();
    assert_eq!(down, -5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_stock_adjustments_sum_exactly() {
    let db = TestDatabase::new().await;
    let service = service_on(&db).await;

    let product = service.create_product(draft("contended")).await.unwrap();

    // 10 increments of 7 and 10 decrements of 3: net +40.
    let mut handles = Vec::new();
    for _ in 0..10 {
        let up = service.clone();
        let id = product.id;
        handles.push(tokio::spawn(async move {
            up.increment_stock(id, StockAdjustment { quantity: 7 })
                .await
                .unwrap();
        }));
        let down = service.clone();
        handles.push(tokio::spawn(async move {
            down.decrement_stock(id, StockAdjustment { quantity: 3 })
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let fetched = service.get_product(product.id).await.unwrap();
    assert_eq!(fetched.quantity, product.quantity + 40);
}

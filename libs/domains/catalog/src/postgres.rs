use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, FromQueryResult,
    QueryOrder, Statement,
};

use crate::entity;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{IdTracker, Product, TRACKER_ID};
use crate::repository::CatalogStore;

/// PostgreSQL implementation of [`CatalogStore`] using SeaORM.
///
/// Plain CRUD goes through the entities. The two concurrency-sensitive
/// mutations are raw conditional `UPDATE … RETURNING` statements: Postgres
/// serializes them on the row lock for the duration of the statement, which
/// is exactly the read-modify-write window, so there is no interval in which
/// another caller can observe a stale value.
#[derive(Clone)]
pub struct PgCatalogStore {
    db: DatabaseConnection,
}

impl PgCatalogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn classify_insert_error(err: DbErr, id: i32) -> CatalogError {
        let text = err.to_string();
        if text.contains("duplicate key") || text.contains("unique constraint") {
            tracing::error!(product_id = id, "Insert collided with an existing id");
            CatalogError::Conflict(format!("Product {} already exists", id))
        } else {
            err.into()
        }
    }
}

/// Row shape of the tracker-advance statement.
#[derive(Debug, FromQueryResult)]
struct AdvancedTracker {
    last_id: i32,
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn get_product(&self, id: i32) -> CatalogResult<Option<Product>> {
        let model = entity::product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let models = entity::product::Entity::find()
            .order_by_asc(entity::product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert_product(&self, product: Product) -> CatalogResult<Product> {
        let id = product.id;
        let active: entity::product::ActiveModel = product.into();

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| Self::classify_insert_error(e, id))?;

        tracing::info!(product_id = model.id, "Inserted product");
        Ok(model.into())
    }

    async fn update_product(&self, product: Product) -> CatalogResult<Product> {
        let id = product.id;
        let active: entity::product::ActiveModel = product.into();

        let model = active.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => CatalogError::NotFound(id),
            other => other.into(),
        })?;

        Ok(model.into())
    }

    async fn delete_product(&self, id: i32) -> CatalogResult<bool> {
        let result = entity::product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn adjust_quantity(&self, id: i32, delta: i32) -> CatalogResult<Option<Product>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            UPDATE products
            SET quantity = quantity + $2
            WHERE id = $1
            RETURNING id, name, quantity, price, description
            "#,
            [id.into(), delta.into()],
        );

        let model = entity::product::Model::find_by_statement(stmt)
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn get_tracker(&self) -> CatalogResult<Option<IdTracker>> {
        let model = entity::tracker::Entity::find_by_id(TRACKER_ID)
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn advance_tracker(&self, ceiling: i32) -> CatalogResult<Option<i32>> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            UPDATE product_id_trackers
            SET last_id = last_id + 1
            WHERE id = $1 AND last_id < $2
            RETURNING last_id
            "#,
            [TRACKER_ID.into(), ceiling.into()],
        );

        let row = AdvancedTracker::find_by_statement(stmt)
            .one(&self.db)
            .await?;

        Ok(row.map(|r| r.last_id))
    }
}

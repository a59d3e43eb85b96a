use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seed the singleton tracker row one below the allocatable floor.
        // The first allocation advances it to 100000.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO product_id_trackers (id, last_id)
            VALUES (1, 99999)
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM product_id_trackers WHERE id = 1")
            .await?;

        Ok(())
    }
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create products table. The primary key is NOT auto-generated:
        // ids come exclusively from the allocator, which hands out values
        // in [100000, 999999].
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(integer(Products::Id).primary_key())
                    .col(string_len(Products::Name, 100))
                    .col(integer(Products::Quantity))
                    .col(decimal_len(Products::Price, 18, 2))
                    .col(string_null(Products::Description))
                    .to_owned(),
            )
            .await?;

        // Create the id-tracker table. It only ever holds the singleton
        // row with id = 1; the seed migration inserts it.
        manager
            .create_table(
                Table::create()
                    .table(ProductIdTrackers::Table)
                    .if_not_exists()
                    .col(integer(ProductIdTrackers::Id).primary_key())
                    .col(integer(ProductIdTrackers::LastId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductIdTrackers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Quantity,
    Price,
    Description,
}

#[derive(DeriveIden)]
enum ProductIdTrackers {
    Table,
    Id,
    LastId,
}

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// SeaORM entity for the `products` table.
///
/// The primary key carries `auto_increment = false`: ids come exclusively
/// from the allocator, the database never generates one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            price: model.price,
            description: model.description,
        }
    }
}

impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name),
            quantity: Set(product.quantity),
            price: Set(product.price),
            description: Set(product.description),
        }
    }
}

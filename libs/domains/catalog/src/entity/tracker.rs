use sea_orm::entity::prelude::*;

/// SeaORM entity for the `product_id_trackers` table.
///
/// Holds exactly one row (id = 1) for the lifetime of the service.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_id_trackers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub last_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::IdTracker {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            last_id: model.last_id,
        }
    }
}

//! Country database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Country;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub region: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity (the surrogate id stays
/// inside the infra layer)
impl From<Model> for Country {
    fn from(model: Model) -> Self {
        Country {
            name: model.name,
            alpha2: model.alpha2,
            alpha3: model.alpha3,
            region: model.region,
        }
    }
}

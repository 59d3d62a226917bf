//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub login: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone_number: String,
    pub image: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            login: model.login,
            email: model.email,
            password_hash: model.password_hash,
            country_code: model.country_code,
            is_public: model.is_public,
            phone_number: model.phone_number,
            image: model.image,
            created_at: model.created_at,
        }
    }
}

//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by login
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Insert a new user row
    async fn insert(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Login.eq(login))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            login: Set(new_user.login),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            country_code: Set(new_user.country_code),
            is_public: Set(new_user.is_public),
            phone_number: Set(new_user.phone_number),
            image: Set(new_user.image),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_insert_err)?;
        Ok(User::from(model))
    }
}

/// Translate a unique-index violation raised by the insert into the
/// matching conflict reason. The indexes are the final arbiter for
/// concurrent duplicate registrations; the service's lookups before
/// insert are advisory only.
fn map_insert_err(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
        if msg.contains("email") {
            return AppError::conflict("not uniq email");
        }
        if msg.contains("login") {
            return AppError::conflict("not uniq login");
        }
    }
    AppError::from(err)
}

//! Storage handle bundling the repositories.
//!
//! Services receive a single explicitly constructed handle instead of
//! process-wide singletons; each request works through the same store
//! with no in-process caching in between.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{CountryRepository, CountryStore, UserRepository, UserStore};

/// Storage trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait Storage: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get country repository
    fn countries(&self) -> Arc<dyn CountryRepository>;
}

/// Concrete implementation of Storage over a live database connection
pub struct Persistence {
    user_repo: Arc<UserStore>,
    country_repo: Arc<CountryStore>,
}

impl Persistence {
    /// Create new storage instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            country_repo: Arc::new(CountryStore::new(db)),
        }
    }
}

impl Storage for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn countries(&self) -> Arc<dyn CountryRepository> {
        self.country_repo.clone()
    }
}

//! Country repository over the immutable reference table.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::country::{self, Entity as CountryEntity};
use crate::domain::Country;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Country repository trait for dependency injection.
///
/// The table is read-only reference data; rows are seeded out of band.
/// All listings return rows in id (insertion) order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// List every country
    async fn list_all(&self) -> AppResult<Vec<Country>>;

    /// List countries whose region is in the given set (exact match)
    async fn list_by_regions(&self, regions: &[String]) -> AppResult<Vec<Country>>;

    /// Find one country by its alpha2 code
    async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>>;
}

/// Concrete implementation of CountryRepository
pub struct CountryStore {
    db: DatabaseConnection,
}

impl CountryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepository for CountryStore {
    async fn list_all(&self) -> AppResult<Vec<Country>> {
        let models = CountryEntity::find()
            .order_by_asc(country::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Country::from).collect())
    }

    async fn list_by_regions(&self, regions: &[String]) -> AppResult<Vec<Country>> {
        let models = CountryEntity::find()
            .filter(country::Column::Region.is_in(regions.iter().cloned()))
            .order_by_asc(country::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Country::from).collect())
    }

    async fn find_by_alpha2(&self, alpha2: &str) -> AppResult<Option<Country>> {
        let result = CountryEntity::find()
            .filter(country::Column::Alpha2.eq(alpha2))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Country::from))
    }
}

//! Country service - Read access to the reference table.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Country;
use crate::errors::{AppError, AppResult};
use crate::infra::Storage;

/// Country service trait for dependency injection.
#[async_trait]
pub trait CountryService: Send + Sync {
    /// List countries, optionally filtered to a set of regions.
    ///
    /// An empty region set means "all countries". An empty result is
    /// an error: the listing endpoint reports `not found` with a 400
    /// whether the table is empty or nothing matched the filter.
    async fn list(&self, regions: &[String]) -> AppResult<Vec<Country>>;

    /// Get one country by its alpha2 code
    async fn get(&self, alpha2: &str) -> AppResult<Country>;
}

/// Concrete implementation of CountryService
pub struct CountryCatalog<S: Storage> {
    storage: Arc<S>,
}

impl<S: Storage> CountryCatalog<S> {
    /// Create new country service instance
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage> CountryService for CountryCatalog<S> {
    async fn list(&self, regions: &[String]) -> AppResult<Vec<Country>> {
        let countries = if regions.is_empty() {
            self.storage.countries().list_all().await?
        } else {
            self.storage.countries().list_by_regions(regions).await?
        };

        // Empty table and empty filter result are deliberately not
        // told apart; both report the same 400.
        if countries.is_empty() {
            return Err(AppError::validation("not found"));
        }

        Ok(countries)
    }

    async fn get(&self, alpha2: &str) -> AppResult<Country> {
        self.storage
            .countries()
            .find_by_alpha2(alpha2)
            .await?
            .ok_or(AppError::NotFound)
    }
}

//! Service Container - Centralized service construction.
//!
//! Wires the storage handle into the service implementations so the
//! rest of the application depends on service traits only.

use std::sync::Arc;

use super::{CountryCatalog, CountryService, Registrar, RegistrationService};
use crate::infra::Persistence;

/// Holds all application services behind their trait objects
pub struct Services {
    registration_service: Arc<dyn RegistrationService>,
    country_service: Arc<dyn CountryService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let storage = Arc::new(Persistence::new(db));
        let registration_service = Arc::new(Registrar::new(storage.clone()));
        let country_service = Arc::new(CountryCatalog::new(storage));

        Self {
            registration_service,
            country_service,
        }
    }

    /// Get registration service
    pub fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    /// Get country service
    pub fn countries(&self) -> Arc<dyn CountryService> {
        self.country_service.clone()
    }
}

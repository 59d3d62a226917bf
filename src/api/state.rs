//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CountryService, RegistrationService, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// Country service
    pub country_service: Arc<dyn CountryService>,
}

impl AppState {
    /// Create application state from a live database connection.
    pub fn from_config(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());

        Self {
            registration_service: services.registration(),
            country_service: services.countries(),
        }
    }

    /// Create application state with manually injected services
    /// (used by tests to wire in mocks).
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        country_service: Arc<dyn CountryService>,
    ) -> Self {
        Self {
            registration_service,
            country_service,
        }
    }
}

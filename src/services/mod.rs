//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod container;
mod country_service;
mod registration_service;

// Service Container
pub use container::Services;

// Service traits and implementations
pub use country_service::{CountryCatalog, CountryService};
pub use registration_service::{Registrar, RegistrationService};

//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and schema migrations
//! - Repositories over SeaORM entities
//! - Storage handle bundling the repositories

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, Migrator};
pub use repositories::{CountryRepository, CountryStore, UserRepository, UserStore};
pub use storage::{Persistence, Storage};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCountryRepository, MockUserRepository};

//! HTTP request handlers.

pub mod auth_handler;
pub mod country_handler;

pub use auth_handler::auth_routes;
pub use country_handler::country_routes;
